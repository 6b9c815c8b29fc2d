use crate::models::catalog::Catalog;
use crate::models::responses::{CategoryStats, OverviewStats};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).round_dp(2)
}

pub fn overview(catalog: &Catalog) -> OverviewStats {
    let mut total_price = Decimal::ZERO;
    let mut rating_distribution = BTreeMap::new();

    for book in catalog.all() {
        total_price += book.price;
        *rating_distribution.entry(book.rating).or_insert(0) += 1;
    }

    OverviewStats {
        total_books: catalog.len(),
        average_price: average(total_price, catalog.len()),
        rating_distribution,
    }
}

pub fn by_category(catalog: &Catalog) -> BTreeMap<String, CategoryStats> {
    let mut totals: BTreeMap<String, (usize, Decimal)> = BTreeMap::new();
    for book in catalog.all() {
        let entry = totals
            .entry(book.category.clone())
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += book.price;
    }

    totals
        .into_iter()
        .map(|(category, (count, total_price))| {
            (
                category,
                CategoryStats {
                    count,
                    total_price,
                    average_price: average(total_price, count),
                },
            )
        })
        .collect()
}
