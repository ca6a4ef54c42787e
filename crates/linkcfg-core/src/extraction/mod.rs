pub mod pdftotext;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::error::LinkCfgError;

/// A table row: one entry per cell, `None` where the extractor found no cell.
pub type Row = Vec<Option<String>>;

/// A single table found on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
}

/// Tables extracted from a single page of a PDF, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTables {
    pub page_number: usize,
    pub tables: Vec<Table>,
}

/// Trait for PDF table extraction backends.
pub trait TableExtractor: Send + Sync {
    /// Extract tables from PDF bytes, returning one PageTables per page.
    fn extract_tables(&self, pdf_bytes: &[u8]) -> Result<Vec<PageTables>, LinkCfgError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Parse pre-extracted tables (the JSON form of `Vec<PageTables>`).
pub fn parse_tables_json(json: &[u8]) -> Result<Vec<PageTables>, LinkCfgError> {
    let pages: Vec<PageTables> = serde_json::from_slice(json)?;
    Ok(pages)
}
