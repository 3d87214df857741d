//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum: HTTP status plus the rule for whether the
//! message may be shown to the client.

/// エラー種別
///
/// 各ドメインのエラー (`AuthError`, `NotesError`) はいずれかの種別に分類され、
/// HTTP ステータスとレスポンスボディの形が決まります。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert!(!ErrorKind::InternalServerError.exposes_message());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400: 入力値が不正（フィールド単位のバリデーションエラーを含む）
    BadRequest,
    /// 401: 認証情報がない、無効、または期限切れ
    Unauthorized,
    /// 404: リソースが存在しない。他ユーザーの所有物もここに含める
    NotFound,
    /// 409: 整合性制約との競合
    Conflict,
    /// 500: サーバー内部エラー。詳細はログにのみ出す
    InternalServerError,
    /// 503: データベースが一時的に利用できない
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP ステータスコード
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// ステータス行の文言
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// メッセージをそのままクライアントに返してよいか
    ///
    /// `false` の場合、ボディは固定の `{"detail": "Internal server error"}` になります。
    #[inline]
    pub const fn exposes_message(&self) -> bool {
        !matches!(self, ErrorKind::InternalServerError)
    }

    /// 5xx かどうか
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
