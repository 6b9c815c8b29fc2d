use crate::models::book::{NormalizedRow, RawBookRow};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("title is empty")]
    EmptyTitle,
    #[error("price {0:?} is not a number")]
    InvalidPrice(String),
    #[error("price {0:?} is negative")]
    NegativePrice(String),
    #[error("rating {0:?} is not one of Zero..Five")]
    UnknownRating(String),
}

lazy_static! {
    // Optional currency marker on either side of the amount. `Â` shows up in
    // front of `£` when UTF-8 pages were decoded as Latin-1 by the scraper.
    static ref PRICE_RE: Regex = Regex::new(
        r"^(?:Â?\p{Sc}|[A-Z]{3})?\s*(?P<amount>[+-]?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)\s*(?:Â?\p{Sc}|[A-Z]{3})?$"
    )
    .unwrap();
    static ref IN_STOCK_RE: Regex = Regex::new(r"^in stock(?:\s*\(\s*\d+\s+available\s*\))?$").unwrap();
}

const RATING_WORDS: [&str; 6] = ["zero", "one", "two", "three", "four", "five"];

pub fn parse_price(raw: &str) -> Result<Decimal, MalformedRecord> {
    let trimmed = raw.trim();
    let amount = PRICE_RE
        .captures(trimmed)
        .and_then(|cap| cap.name("amount"))
        .map(|m| m.as_str().replace(',', ""))
        .ok_or_else(|| MalformedRecord::InvalidPrice(raw.to_string()))?;

    let price =
        Decimal::from_str(&amount).map_err(|_| MalformedRecord::InvalidPrice(raw.to_string()))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(MalformedRecord::NegativePrice(raw.to_string()));
    }

    // "-0.00" parses with a negative sign; store it as plain zero
    Ok(price.abs())
}

pub fn parse_rating(raw: &str) -> Result<u8, MalformedRecord> {
    let word = raw.trim().to_lowercase();
    RATING_WORDS
        .iter()
        .position(|candidate| *candidate == word)
        .map(|idx| idx as u8)
        .ok_or_else(|| MalformedRecord::UnknownRating(raw.to_string()))
}

/// Unrecognized phrases are treated as out of stock rather than rejected.
pub fn parse_availability(raw: &str) -> bool {
    let phrase = raw.trim().to_lowercase();
    match phrase.as_str() {
        "available" => true,
        "out of stock" | "unavailable" | "sold out" => false,
        other => IN_STOCK_RE.is_match(other),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn normalize(row: &RawBookRow) -> Result<NormalizedRow, MalformedRecord> {
    let title = row.title.trim();
    if title.is_empty() {
        return Err(MalformedRecord::EmptyTitle);
    }

    Ok(NormalizedRow {
        title: title.to_string(),
        category: row.category.trim().to_string(),
        price: parse_price(&row.price)?,
        rating: parse_rating(&row.rating)?,
        availability: parse_availability(&row.availability),
        description: non_empty(row.description.as_deref()),
        image_url: non_empty(row.image_url.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn raw(title: &str, price: &str, rating: &str, availability: &str) -> RawBookRow {
        RawBookRow {
            title: title.to_string(),
            category: " Fantasy ".to_string(),
            price: price.to_string(),
            rating: rating.to_string(),
            availability: availability.to_string(),
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn test_parse_price_with_currency_prefix() {
        assert_eq!(parse_price("£10.00").unwrap(), Decimal::new(1000, 2));
        assert_eq!(parse_price("Â£51.77").unwrap(), Decimal::new(5177, 2));
        assert_eq!(parse_price("$1,234.50").unwrap(), Decimal::new(123450, 2));
        assert_eq!(parse_price("GBP 7.5").unwrap(), Decimal::new(75, 1));
    }

    #[test]
    fn test_parse_price_bare_and_suffixed() {
        assert_eq!(parse_price(" 12 ").unwrap(), Decimal::new(12, 0));
        assert_eq!(parse_price("9.99 €").unwrap(), Decimal::new(999, 2));
        assert_eq!(parse_price("£0.00").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(
            parse_price("notaprice"),
            Err(MalformedRecord::InvalidPrice("notaprice".to_string()))
        );
        assert!(parse_price("").is_err());
        assert!(parse_price("£").is_err());
        assert!(parse_price("abc12").is_err());
        assert!(parse_price("12.5.3").is_err());
    }

    #[test]
    fn test_parse_price_requires_grouped_thousands() {
        assert_eq!(parse_price("£1,234,567.89").unwrap(), Decimal::new(123456789, 2));
        assert_eq!(parse_price("999").unwrap(), Decimal::new(999, 0));
        assert!(parse_price("1,,,0").is_err());
        assert!(parse_price("1,").is_err());
        assert!(parse_price("12,34").is_err());
        assert!(parse_price("1234,567").is_err());
        assert!(parse_price(",100").is_err());
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        assert_eq!(
            parse_price("-£3.00").unwrap_err(),
            MalformedRecord::InvalidPrice("-£3.00".to_string())
        );
        assert_eq!(
            parse_price("£-3.00").unwrap_err(),
            MalformedRecord::NegativePrice("£-3.00".to_string())
        );
    }

    #[test]
    fn test_parse_rating_words() {
        assert_eq!(parse_rating("Zero").unwrap(), 0);
        assert_eq!(parse_rating("one").unwrap(), 1);
        assert_eq!(parse_rating("THREE").unwrap(), 3);
        assert_eq!(parse_rating(" Five ").unwrap(), 5);
    }

    #[test]
    fn test_parse_rating_outside_closed_set() {
        assert!(parse_rating("Six").is_err());
        assert!(parse_rating("5").is_err());
        assert!(parse_rating("").is_err());
    }

    #[test]
    fn test_parse_availability_phrases() {
        assert!(parse_availability("In stock"));
        assert!(parse_availability("  in STOCK (22 available)"));
        assert!(parse_availability("Available"));
        assert!(!parse_availability("Out of stock"));
        assert!(!parse_availability("Sold out"));
    }

    #[test]
    fn test_parse_availability_unknown_defaults_to_false() {
        assert!(!parse_availability(""));
        assert!(!parse_availability("ask the shopkeeper"));
        assert!(!parse_availability("in stockroom"));
    }

    #[test]
    fn test_normalize_trims_fields() {
        let mut row = raw("  The Hobbit ", "£10.00", "Five", "In stock");
        row.description = Some("   ".to_string());
        row.image_url = Some(" https://books.toscrape.com/media/a.jpg ".to_string());

        let normalized = normalize(&row).unwrap();

        assert_eq!(normalized.title, "The Hobbit");
        assert_eq!(normalized.category, "Fantasy");
        assert_eq!(normalized.rating, 5);
        assert!(normalized.availability);
        assert_eq!(normalized.description, None);
        assert_eq!(
            normalized.image_url.as_deref(),
            Some("https://books.toscrape.com/media/a.jpg")
        );
    }

    #[test]
    fn test_normalize_rejects_blank_title() {
        let row = raw("   ", "£10.00", "Five", "In stock");
        assert_eq!(normalize(&row), Err(MalformedRecord::EmptyTitle));
    }

    #[test]
    fn test_normalize_propagates_field_errors() {
        let row = raw("Bad Row", "notaprice", "Two", "In stock");
        assert!(matches!(normalize(&row), Err(MalformedRecord::InvalidPrice(_))));

        let row = raw("Bad Rating", "£1.00", "Seven", "In stock");
        assert!(matches!(normalize(&row), Err(MalformedRecord::UnknownRating(_))));
    }

    #[test]
    fn test_normalized_rows_hold_invariants() {
        let rows = [
            raw("A", "£0.01", "zero", "In stock"),
            raw("B", "1,000", "Five", "whatever"),
            raw("C", "USD 3", "three", "Out of stock"),
        ];

        for row in rows.iter() {
            let normalized = normalize(row).unwrap();
            assert!(normalized.rating <= 5);
            assert!(!normalized.price.is_sign_negative());
            assert!(!normalized.title.is_empty());
        }
    }
}
