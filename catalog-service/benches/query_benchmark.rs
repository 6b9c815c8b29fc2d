use catalog_service::models::book::RawBookRow;
use catalog_service::models::catalog::Catalog;
use catalog_service::services::normalizer::normalize;
use catalog_service::services::query::{run_query, BookQuery, SearchParams};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CATEGORIES: [&str; 5] = ["Travel", "Mystery", "Poetry", "Fantasy", "History"];
const RATINGS: [&str; 6] = ["Zero", "One", "Two", "Three", "Four", "Five"];

fn create_sample_rows() -> Vec<RawBookRow> {
    (0..1000)
        .map(|i| RawBookRow {
            title: format!("Test Book {}", i),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            price: format!("£{}.{:02}", 10 + i % 50, i % 100),
            rating: RATINGS[i % RATINGS.len()].to_string(),
            availability: if i % 7 == 0 { "Out of stock" } else { "In stock" }.to_string(),
            description: None,
            image_url: None,
        })
        .collect()
}

fn benchmark_normalize_row(c: &mut Criterion) {
    let row = RawBookRow {
        title: "A Light in the Attic".to_string(),
        category: "Poetry".to_string(),
        price: "Â£51.77".to_string(),
        rating: "Three".to_string(),
        availability: "In stock (22 available)".to_string(),
        description: None,
        image_url: None,
    };

    c.bench_function("normalize_row", |b| b.iter(|| normalize(black_box(&row))));
}

fn benchmark_build_catalog(c: &mut Criterion) {
    let rows = create_sample_rows();

    c.bench_function("build_catalog_1000", |b| {
        b.iter(|| Catalog::build(black_box(rows.clone())))
    });
}

fn benchmark_query_with_filters(c: &mut Criterion) {
    let (catalog, _) = Catalog::build(create_sample_rows()).unwrap();
    let query = BookQuery::try_from(SearchParams {
        category: Some("Poetry".to_string()),
        min_rating: Some("3".to_string()),
        title_contains: Some("book 1".to_string()),
        ..Default::default()
    })
    .unwrap();

    c.bench_function("query_with_filters", |b| {
        b.iter(|| run_query(black_box(&catalog), black_box(&query)).total_matches)
    });
}

fn benchmark_query_sorted(c: &mut Criterion) {
    let (catalog, _) = Catalog::build(create_sample_rows()).unwrap();
    let query = BookQuery::try_from(SearchParams {
        sort_by: Some("price".to_string()),
        descending: Some("true".to_string()),
        page: Some("3".to_string()),
        ..Default::default()
    })
    .unwrap();

    c.bench_function("query_sorted_by_price", |b| {
        b.iter(|| run_query(black_box(&catalog), black_box(&query)).items.len())
    });
}

criterion_group!(
    benches,
    benchmark_normalize_row,
    benchmark_build_catalog,
    benchmark_query_with_filters,
    benchmark_query_sorted
);
criterion_main!(benches);
