use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait CategoryRepo: Sync + Send {
    async fn get_categories(&self, user_id: i32) -> Result<Vec<Category>, CategoryRepoError>;

    /// Name of a category, scoped to its owner. `None` when the id does not
    /// exist or belongs to another user.
    async fn get_category_name(
        &self,
        category_id: i32,
        user_id: i32,
    ) -> Result<Option<String>, CategoryRepoError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Error, Debug)]
pub enum CategoryRepoError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
