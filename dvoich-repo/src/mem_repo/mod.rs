use crate::HealthCheck;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

mod category_repo;
mod transaction_repo;
mod user_repo;

pub use category_repo::MemCategoryRepo;
pub use transaction_repo::MemTransactionRepo;
pub use user_repo::MemUserRepo;

pub fn create_repos() -> (
    Arc<MemUserRepo>,
    Arc<MemCategoryRepo>,
    Arc<MemTransactionRepo>,
    Arc<MemHealthCheck>,
) {
    (
        Arc::new(MemUserRepo::new()),
        Arc::new(MemCategoryRepo::new()),
        Arc::new(MemTransactionRepo::new()),
        Arc::new(MemHealthCheck),
    )
}

pub struct MemHealthCheck;

#[async_trait]
impl HealthCheck for MemHealthCheck {
    async fn check(&self) -> Result<DateTime<Utc>, anyhow::Error> {
        Ok(Utc::now())
    }
}
