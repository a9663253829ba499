use crate::category_repo::{Category, CategoryRepo, CategoryRepoError};
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query_as, query_scalar};

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl CategoryRepo for SQLxRepo {
    async fn get_categories(&self, user_id: i32) -> Result<Vec<Category>, CategoryRepoError> {
        let categories: Vec<CategoryRow> =
            query_as("SELECT id, name FROM categories WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .with_context(|| format!("Unable to get categories for user {}", user_id))?;
        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn get_category_name(
        &self,
        category_id: i32,
        user_id: i32,
    ) -> Result<Option<String>, CategoryRepoError> {
        let name: Option<String> =
            query_scalar("SELECT name FROM categories WHERE id = $1 AND user_id = $2")
                .bind(category_id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| {
                    format!("Unable to get category {} for user {}", category_id, user_id)
                })?;
        Ok(name)
    }
}
