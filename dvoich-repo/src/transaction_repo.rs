use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn get_transactions(
        &self,
        user_id: i32,
        filter: TransactionFilter,
    ) -> Result<Vec<TransactionEntry>, TransactionRepoError>;
}

/// Optional predicates applied on top of the mandatory user scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    pub category_id: Option<i32>,
    pub cutoff: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionEntry {
    pub user_id: i32,
    pub category_id: i32,
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub description: Option<String>,
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
