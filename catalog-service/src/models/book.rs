use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the source file exactly as scraped.
///
/// Column names are a fixed contract with the producer of the file; columns
/// not listed here (the scraper also writes `id` and `book_url`) are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawBookRow {
    pub title: String,
    pub category: String,
    pub price: String,
    pub rating: String,
    pub availability: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Typed fields of a row that passed normalization but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub title: String,
    pub category: String,
    pub price: Decimal,
    pub rating: u8,
    pub availability: bool,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub price: Decimal,
    pub rating: u8,
    pub availability: bool,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Book {
    pub fn new(id: u32, row: NormalizedRow) -> Self {
        Self {
            id,
            title: row.title,
            category: row.category,
            price: row.price,
            rating: row.rating,
            availability: row.availability,
            description: row.description,
            image_url: row.image_url,
        }
    }
}
