use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod category_repo;
pub mod transaction_repo;
pub mod user_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trips the store and reports its current wall-clock time.
    async fn check(&self) -> Result<DateTime<Utc>, anyhow::Error>;
}
