//! List Categories Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::CategoryWithCount;
use crate::domain::repository::CategoryRepository;
use crate::error::NotesResult;

/// Lists the caller's categories with note counts
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, owner: UserId) -> NotesResult<Vec<CategoryWithCount>> {
        self.category_repo.list_with_counts(owner).await
    }
}
