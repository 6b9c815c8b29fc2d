use crate::models::book::RawBookRow;
use crate::models::catalog::{BuildReport, Catalog, CatalogError, SourceRow};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub const DEFAULT_DATA_PATH: &str = "./data/all_books.csv";

/// Decodes every record of a CSV source with a header row.
///
/// A record that fails to decode is returned as [`SourceRow::Undecodable`];
/// only an I/O failure of the underlying reader aborts.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SourceRow>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawBookRow>() {
        match result {
            Ok(row) => rows.push(SourceRow::Decoded(row)),
            Err(e) => {
                if let csv::ErrorKind::Io(_) = e.kind() {
                    return Err(e.into());
                }
                rows.push(SourceRow::Undecodable(e.to_string()));
            }
        }
    }

    Ok(rows)
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<(Catalog, BuildReport), CatalogError> {
    let path = path.as_ref();
    info!("Loading books from {}", path.display());

    let file = File::open(path)?;
    let rows = read_rows(file)?;
    Catalog::build(rows)
}
