use crate::sqlx_repo::SQLxRepo;
use crate::transaction_repo::{
    TransactionEntry, TransactionFilter, TransactionRepo, TransactionRepoError,
};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TransactionRow {
    user_id: i32,
    category_id: i32,
    amount: Decimal,
    date: NaiveDateTime,
    description: Option<String>,
}

impl From<TransactionRow> for TransactionEntry {
    fn from(row: TransactionRow) -> Self {
        TransactionEntry {
            user_id: row.user_id,
            category_id: row.category_id,
            amount: row.amount,
            date: row.date,
            description: row.description,
        }
    }
}

/// Assembles the filtered transaction query in one step. Every value goes
/// through `push_bind`; the SQL text never carries user data.
fn transactions_query(
    user_id: i32,
    filter: &TransactionFilter,
) -> QueryBuilder<'static, Postgres> {
    let mut query_builder = QueryBuilder::new(
        "SELECT user_id, category_id, amount, date, description FROM transactions WHERE user_id = ",
    );
    query_builder.push_bind(user_id);
    if let Some(category_id) = filter.category_id {
        query_builder
            .push(" AND category_id = ")
            .push_bind(category_id);
    }
    if let Some(cutoff) = filter.cutoff {
        query_builder
            .push(" AND date >= ")
            .push_bind(cutoff)
            .push("::timestamp");
    }
    query_builder.push(" ORDER BY category_id, date DESC");
    query_builder
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transactions(
        &self,
        user_id: i32,
        filter: TransactionFilter,
    ) -> Result<Vec<TransactionEntry>, TransactionRepoError> {
        let mut query_builder = transactions_query(user_id, &filter);
        let entries: Vec<TransactionRow> = query_builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Unable to get transactions for user {}", user_id))?;
        Ok(entries.into_iter().map(TransactionEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::transactions_query;
    use crate::transaction_repo::TransactionFilter;
    use chrono::{NaiveDate, NaiveDateTime};
    use rstest::rstest;

    const BASE: &str =
        "SELECT user_id, category_id, amount, date, description FROM transactions WHERE user_id = $1";
    const ORDER: &str = " ORDER BY category_id, date DESC";

    fn cutoff() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn user_scope_only() {
        let query = transactions_query(1, &TransactionFilter::default());
        assert_eq!(query.sql(), format!("{}{}", BASE, ORDER));
    }

    #[test]
    fn category_filter_binds_second_parameter() {
        let filter = TransactionFilter {
            category_id: Some(7),
            cutoff: None,
        };
        let query = transactions_query(1, &filter);
        assert_eq!(
            query.sql(),
            format!("{} AND category_id = $2{}", BASE, ORDER)
        );
    }

    #[test]
    fn cutoff_binds_second_parameter_when_alone() {
        let filter = TransactionFilter {
            category_id: None,
            cutoff: Some(cutoff()),
        };
        let query = transactions_query(1, &filter);
        assert_eq!(
            query.sql(),
            format!("{} AND date >= $2::timestamp{}", BASE, ORDER)
        );
    }

    #[test]
    fn both_filters_take_consecutive_parameters() {
        let filter = TransactionFilter {
            category_id: Some(7),
            cutoff: Some(cutoff()),
        };
        let query = transactions_query(1, &filter);
        assert_eq!(
            query.sql(),
            format!(
                "{} AND category_id = $2 AND date >= $3::timestamp{}",
                BASE, ORDER
            )
        );
    }

    #[rstest]
    #[case(None, None, 1)]
    #[case(Some(7), None, 2)]
    #[case(None, Some(cutoff()), 2)]
    #[case(Some(7), Some(cutoff()), 3)]
    fn placeholder_count_matches_active_filters(
        #[case] category_id: Option<i32>,
        #[case] cutoff: Option<NaiveDateTime>,
        #[case] expected: usize,
    ) {
        let filter = TransactionFilter {
            category_id,
            cutoff,
        };
        let query = transactions_query(1, &filter);
        let placeholders = query.sql().matches('$').count();
        assert_eq!(placeholders, expected);
    }
}
