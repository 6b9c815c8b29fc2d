use crate::models::book::Book;
use crate::models::catalog::Catalog;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::cmp::Ordering;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidFilter {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("malformed query string: {0}")]
    Malformed(String),
}

fn invalid(field: &'static str, value: &str, reason: &'static str) -> QueryError {
    QueryError::InvalidFilter {
        field,
        value: value.to_string(),
        reason,
    }
}

/// Query string exactly as received. Everything stays text so that
/// malformed values surface as `InvalidFilter` instead of a generic
/// extractor rejection.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub category: Option<String>,
    #[serde(alias = "min_rating")]
    pub min_rating: Option<String>,
    #[serde(alias = "title_contains", alias = "title")]
    pub title_contains: Option<String>,
    #[serde(alias = "min_price")]
    pub min_price: Option<String>,
    #[serde(alias = "max_price")]
    pub max_price: Option<String>,
    #[serde(alias = "sort_by")]
    pub sort_by: Option<String>,
    pub descending: Option<String>,
    pub page: Option<String>,
    #[serde(alias = "page_size")]
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Rating,
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            _ => Err(invalid("sortBy", s, "expected \"price\" or \"rating\"")),
        }
    }
}

/// Validated query. `page` is 1-based and `page_size` is already clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct BookQuery {
    pub category: Option<String>,
    pub min_rating: Option<u8>,
    pub title_contains: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort_by: Option<SortKey>,
    pub descending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            category: None,
            min_rating: None,
            title_contains: None,
            min_price: None,
            max_price: None,
            sort_by: None,
            descending: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_positive(field: &'static str, raw: &str) -> Result<usize, QueryError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid(field, raw, "must be at least 1")),
        Ok(n) => Ok(n),
        // Too large for usize is still a well-formed number: clamp, don't reject
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) => Err(invalid(field, raw, "expected a positive integer")),
    }
}

fn parse_price_bound(field: &'static str, raw: &str) -> Result<Decimal, QueryError> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|_| invalid(field, raw, "expected a decimal number"))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid(field, raw, "must not be negative"));
    }
    Ok(value)
}

impl TryFrom<SearchParams> for BookQuery {
    type Error = QueryError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let min_rating = params
            .min_rating
            .as_deref()
            .map(|raw| match raw.trim().parse::<u8>() {
                Ok(rating) if rating <= 5 => Ok(rating),
                Ok(_) => Err(invalid("minRating", raw, "must be between 0 and 5")),
                Err(_) => Err(invalid("minRating", raw, "expected an integer")),
            })
            .transpose()?;

        let min_price = params
            .min_price
            .as_deref()
            .map(|raw| parse_price_bound("minPrice", raw))
            .transpose()?;
        let max_price = params
            .max_price
            .as_deref()
            .map(|raw| parse_price_bound("maxPrice", raw))
            .transpose()?;
        if let (Some(low), Some(high), Some(raw)) = (min_price, max_price, &params.min_price) {
            if low > high {
                return Err(invalid("minPrice", raw, "must not exceed maxPrice"));
            }
        }

        let sort_by = params
            .sort_by
            .as_deref()
            .map(SortKey::from_str)
            .transpose()?;

        let descending = match params.descending.as_deref().map(str::trim) {
            None => false,
            Some(raw) => match raw.to_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(invalid("descending", raw, "expected true or false")),
            },
        };

        let page = params
            .page
            .as_deref()
            .map(|raw| parse_positive("page", raw))
            .transpose()?
            .unwrap_or(1);

        let page_size = params
            .page_size
            .as_deref()
            .map(|raw| parse_positive("pageSize", raw))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Ok(BookQuery {
            category: params.category,
            min_rating,
            title_contains: params.title_contains.map(|t| t.to_lowercase()),
            min_price,
            max_price,
            sort_by,
            descending,
            page,
            page_size,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a Book>,
    pub total_matches: usize,
    pub page: usize,
    pub page_size: usize,
}

impl BookQuery {
    fn matches(&self, book: &Book) -> bool {
        if let Some(ref category) = self.category {
            if book.category != *category {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if book.rating < min_rating {
                return false;
            }
        }

        if let Some(ref needle) = self.title_contains {
            if !book.title.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if book.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if book.price > max_price {
                return false;
            }
        }

        true
    }

    fn compare(&self, key: SortKey, a: &Book, b: &Book) -> Ordering {
        let by_key = match key {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Rating => a.rating.cmp(&b.rating),
        };
        let by_key = if self.descending { by_key.reverse() } else { by_key };
        by_key.then_with(|| a.id.cmp(&b.id))
    }
}

pub fn run_query<'a>(catalog: &'a Catalog, query: &BookQuery) -> QueryPage<'a> {
    let mut matches: Vec<&Book> = catalog.all().filter(|book| query.matches(book)).collect();

    if let Some(key) = query.sort_by {
        matches.sort_by(|a, b| query.compare(key, a, b));
    }

    let total_matches = matches.len();
    let offset = (query.page - 1).saturating_mul(query.page_size);
    let items = matches
        .into_iter()
        .skip(offset)
        .take(query.page_size)
        .collect();

    QueryPage {
        items,
        total_matches,
        page: query.page,
        page_size: query.page_size,
    }
}
