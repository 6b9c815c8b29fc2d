use anyhow::Result;
use catalog_service::models::catalog::Catalog;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Writes the normalized catalog in load order.
pub fn write_catalog<W: Write>(catalog: &Catalog, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let books: Vec<_> = catalog.all().collect();
            serde_json::to_writer_pretty(&mut out, &books)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for book in catalog.all() {
                writer.serialize(book)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
