use crate::models::book::Book;
use crate::services::query::QueryPage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub books_loaded: usize,
    pub skipped_rows: usize,
    pub loaded_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub items: Vec<Book>,
    pub total_matches: usize,
    pub page: usize,
    pub page_size: usize,
}

impl From<QueryPage<'_>> for BookPage {
    fn from(page: QueryPage<'_>) -> Self {
        Self {
            items: page.items.into_iter().cloned().collect(),
            total_matches: page.total_matches,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_books: usize,
    pub average_price: Decimal,
    pub rating_distribution: BTreeMap<u8, usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub count: usize,
    pub total_price: Decimal,
    pub average_price: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}
