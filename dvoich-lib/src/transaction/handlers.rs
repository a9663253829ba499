use super::Period;
use crate::error::ApiError;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::{NaiveDateTime, Utc};
use dvoich_repo::category_repo::CategoryRepo;
use dvoich_repo::transaction_repo::{TransactionEntry, TransactionFilter, TransactionRepo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MISSING_PARAMS: &str = "Не указаны обязательные параметры.";
const TRANSACTIONS_ERROR: &str = "Ошибка получения транзакций";

/// Wire sentinel for "no category filter" and the label attached to rows in
/// that case.
const ALL_CATEGORIES: &str = "всё";
const ALL_CATEGORIES_LABEL: &str = "Всё";

#[derive(Deserialize)]
pub struct TransactionsRequest {
    user_id: Option<i32>,
    category: Option<String>,
    srok: Option<String>,
}

#[derive(Serialize)]
pub struct TransactionRecord {
    pub user_id: i32,
    pub category_id: i32,
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub description: Option<String>,
    pub category_name: Option<String>,
}

impl TransactionRecord {
    fn new(entry: TransactionEntry, category_name: Option<String>) -> TransactionRecord {
        TransactionRecord {
            user_id: entry.user_id,
            category_id: entry.category_id,
            amount: entry.amount,
            date: entry.date,
            description: entry.description,
            category_name,
        }
    }
}

#[post("/getTransactions")]
pub async fn get_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    request: web::Json<TransactionsRequest>,
) -> Result<impl Responder, ApiError> {
    let request = request.into_inner();
    let (user_id, category, srok) = match (request.user_id, request.category, request.srok) {
        (Some(user_id), Some(category), Some(srok))
            if !category.is_empty() && !srok.is_empty() =>
        {
            (user_id, category, srok)
        }
        _ => return Err(ApiError::BadRequest(MISSING_PARAMS)),
    };

    let category_id = if category == ALL_CATEGORIES {
        None
    } else {
        Some(
            category
                .parse::<i32>()
                .map_err(ApiError::internal(TRANSACTIONS_ERROR))?,
        )
    };
    let cutoff = Period::parse(&srok).cutoff(Utc::now().naive_utc());

    let entries = transaction_repo
        .get_transactions(
            user_id,
            TransactionFilter {
                category_id,
                cutoff,
            },
        )
        .await
        .map_err(ApiError::internal(TRANSACTIONS_ERROR))?;

    // one name lookup for the whole result set; skipped entirely for "всё"
    let category_name = match category_id {
        None => Some(ALL_CATEGORIES_LABEL.to_owned()),
        Some(id) => category_repo
            .get_category_name(id, user_id)
            .await
            .map_err(ApiError::internal(TRANSACTIONS_ERROR))?,
    };

    let records: Vec<TransactionRecord> = entries
        .into_iter()
        .map(|entry| TransactionRecord::new(entry, category_name.clone()))
        .collect();
    Ok(HttpResponse::Ok().json(records))
}
