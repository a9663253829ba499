mod category_repo;
mod transaction_repo;
mod user_repo;

use crate::category_repo::CategoryRepo;
use crate::transaction_repo::TransactionRepo;
use crate::user_repo::UserRepo;
use crate::HealthCheck;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

pub struct SQLxRepo {
    pool: Pool<Postgres>,
}

/// Builds the shared lazy pool and hands out one repo per storage concern.
/// The pool dials on first use; connection recovery belongs to sqlx.
pub fn create_repos(
    database_url: &str,
    max_pool_size: u32,
) -> Result<
    (
        Arc<dyn UserRepo>,
        Arc<dyn CategoryRepo>,
        Arc<dyn TransactionRepo>,
        Arc<dyn HealthCheck>,
    ),
    anyhow::Error,
> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect_lazy(database_url)
        .context("Invalid database url")?;

    let repo = Arc::new(SQLxRepo { pool });
    Ok((
        repo.clone() as Arc<dyn UserRepo>,
        repo.clone() as Arc<dyn CategoryRepo>,
        repo.clone() as Arc<dyn TransactionRepo>,
        repo as Arc<dyn HealthCheck>,
    ))
}

#[async_trait]
impl HealthCheck for SQLxRepo {
    async fn check(&self) -> Result<DateTime<Utc>, anyhow::Error> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .context("Unable to reach the database")?;
        Ok(now)
    }
}
