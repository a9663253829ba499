use crate::transaction_repo::{
    TransactionEntry, TransactionFilter, TransactionRepo, TransactionRepoError,
};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct MemTransactionRepo {
    transactions: RwLock<Vec<TransactionEntry>>,
}

impl MemTransactionRepo {
    pub fn new() -> MemTransactionRepo {
        MemTransactionRepo {
            transactions: RwLock::new(Vec::new()),
        }
    }

    /// Seeds a transaction. Transaction writes have no endpoint in this API,
    /// so tests insert their fixtures here.
    pub fn add_transaction(&self, entry: TransactionEntry) -> Result<(), anyhow::Error> {
        let mut write_guard = self.write_lock()?;
        write_guard.push(entry);
        Ok(())
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<Vec<TransactionEntry>>, anyhow::Error> {
        self.transactions
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<Vec<TransactionEntry>>, anyhow::Error> {
        self.transactions
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl TransactionRepo for MemTransactionRepo {
    async fn get_transactions(
        &self,
        user_id: i32,
        filter: TransactionFilter,
    ) -> Result<Vec<TransactionEntry>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let mut entries: Vec<TransactionEntry> = read_guard
            .iter()
            .filter(|t| t.user_id == user_id)
            .filter(|t| filter.category_id.map_or(true, |c| t.category_id == c))
            .filter(|t| filter.cutoff.map_or(true, |cutoff| t.date >= cutoff))
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.category_id.cmp(&b.category_id).then(b.date.cmp(&a.date)));
        Ok(entries)
    }
}
