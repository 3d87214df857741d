//! Request extractors shared by every HTTP surface

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

/// JSON ボディ抽出子
///
/// `axum::Json` と同じですが、リジェクションを [`AppError`] に変換し、
/// パース失敗時も `{"detail": ...}` 形式の 400 を返します。
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
