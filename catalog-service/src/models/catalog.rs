use crate::models::book::{Book, RawBookRow};
use crate::services::normalizer::normalize;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no rows could be normalized ({skipped} skipped)")]
    EmptyCatalog { skipped: usize },
    #[error("source file error: {0}")]
    Source(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of reading one source row, as handed to [`Catalog::build`].
///
/// Rows the reader could not decode arrive as `Undecodable` so they are
/// counted as skipped alongside rows the normalizer rejects.
#[derive(Debug, Clone)]
pub enum SourceRow {
    Decoded(RawBookRow),
    Undecodable(String),
}

impl From<RawBookRow> for SourceRow {
    fn from(row: RawBookRow) -> Self {
        SourceRow::Decoded(row)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Immutable, ordered book collection. Built once, then only read.
#[derive(Debug)]
pub struct Catalog {
    books: Vec<Book>,
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    pub fn build<I, R>(rows: I) -> Result<(Self, BuildReport), CatalogError>
    where
        I: IntoIterator<Item = R>,
        R: Into<SourceRow>,
    {
        let mut books = Vec::new();
        let mut by_id = HashMap::new();
        let mut skipped = 0;

        for (position, source) in rows.into_iter().enumerate() {
            let source: SourceRow = source.into();
            let outcome = match source {
                SourceRow::Decoded(row) => normalize(&row).map_err(|e| e.to_string()),
                SourceRow::Undecodable(reason) => Err(reason),
            };

            match outcome {
                Ok(normalized) => {
                    let id = books.len() as u32 + 1;
                    by_id.insert(id, books.len());
                    books.push(Book::new(id, normalized));
                }
                Err(reason) => {
                    warn!(record = position + 1, "Skipping malformed record: {}", reason);
                    skipped += 1;
                }
            }
        }

        if books.is_empty() {
            return Err(CatalogError::EmptyCatalog { skipped });
        }

        let report = BuildReport {
            loaded: books.len(),
            skipped,
        };
        info!(
            "Catalog built: {} books loaded, {} rows skipped",
            report.loaded, report.skipped
        );

        Ok((Self { books, by_id }, report))
    }

    pub fn get(&self, id: u32) -> Option<&Book> {
        self.by_id.get(&id).map(|&idx| &self.books[idx])
    }

    /// Load-ordered view. Cloning the iterator restarts it.
    pub fn all(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn categories(&self) -> Vec<String> {
        self.books
            .iter()
            .map(|book| book.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn top_rated(&self) -> Vec<&Book> {
        let Some(max_rating) = self.books.iter().map(|book| book.rating).max() else {
            return Vec::new();
        };
        self.books
            .iter()
            .filter(|book| book.rating == max_rating)
            .collect()
    }
}
