//! Create Category Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repository::CategoryRepository;
use crate::domain::value_objects::{CategoryName, ColorHex};
use crate::error::{NotesError, NotesResult};

/// Create category input
pub struct CreateCategoryInput {
    pub name: String,
    pub color_hex: String,
}

/// Creates a category owned by the caller
pub struct CreateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> CreateCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(
        &self,
        owner: UserId,
        input: CreateCategoryInput,
    ) -> NotesResult<Category> {
        let category = NewCategory {
            name: CategoryName::new(&input.name)?,
            color_hex: ColorHex::new(&input.color_hex)?,
        };

        // The (user_id, name) constraint still decides concurrent inserts
        if self
            .category_repo
            .exists_by_name(owner, &category.name)
            .await?
        {
            return Err(NotesError::CategoryNameTaken);
        }

        let created = self.category_repo.create(owner, &category).await?;

        tracing::info!(
            user_id = %owner,
            category_id = %created.id,
            "Category created"
        );

        Ok(created)
    }
}
