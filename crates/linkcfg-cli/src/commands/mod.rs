pub mod convert;
pub mod defaults;
pub mod extract;

use linkcfg_core::error::LinkCfgError;
use linkcfg_core::extraction::pdftotext::PdftotextExtractor;
use linkcfg_core::extraction::{parse_tables_json, PageTables, TableExtractor};
use std::path::{Path, PathBuf};

fn is_tables_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Fail early when some input is a PDF and pdftotext is not installed.
pub fn ensure_pdf_backend(inputs: &[PathBuf]) -> Result<(), LinkCfgError> {
    let needs_pdftotext = inputs.iter().any(|path| !is_tables_json(path));
    if needs_pdftotext && !PdftotextExtractor::is_available() {
        return Err(LinkCfgError::PdftotextNotFound);
    }
    Ok(())
}

/// Read an input file into page tables.
///
/// `.json` files hold pre-extracted tables; anything else goes to the PDF
/// extractor.
pub fn read_pages(
    path: &Path,
    extractor: &dyn TableExtractor,
) -> Result<Vec<PageTables>, LinkCfgError> {
    let bytes = std::fs::read(path)?;

    if is_tables_json(path) {
        parse_tables_json(&bytes)
    } else {
        log::debug!("{}: extracting with {}", path.display(), extractor.backend_name());
        extractor.extract_tables(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_extension_means_pre_extracted() {
        assert!(is_tables_json(Path::new("report.json")));
        assert!(is_tables_json(Path::new("REPORT.JSON")));
        assert!(!is_tables_json(Path::new("report.pdf")));
        assert!(!is_tables_json(Path::new("report")));
    }

    #[test]
    fn test_json_inputs_skip_backend_check() {
        let inputs = [PathBuf::from("a.json"), PathBuf::from("b.json")];
        assert!(ensure_pdf_backend(&inputs).is_ok());
    }
}
