use crate::error::LinkCfgError;
use crate::extraction::table::tables_from_layout;
use crate::extraction::{PageTables, TableExtractor};
use std::io::Write;
use std::process::{Command, Stdio};

/// Table extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to preserve whitespace alignment of tables.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Whether a `pdftotext` binary can be spawned from `PATH`.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for PdftotextExtractor {
    fn extract_tables(&self, pdf_bytes: &[u8]) -> Result<Vec<PageTables>, LinkCfgError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| LinkCfgError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| LinkCfgError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    LinkCfgError::PdftotextNotFound
                } else {
                    LinkCfgError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(LinkCfgError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = pages_from_layout_text(&text);
        log::debug!(
            "pdftotext produced {} page(s), {} table(s)",
            pages.len(),
            pages.iter().map(|p| p.tables.len()).sum::<usize>()
        );
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split layout text into pages (pdftotext uses form feed \x0c as page
/// separator) and reconstruct each page's tables.
fn pages_from_layout_text(text: &str) -> Vec<PageTables> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| {
            let lines: Vec<&str> = page_text.lines().collect();
            PageTables {
                page_number: i + 1,
                tables: tables_from_layout(&lines),
            }
        })
        .filter(|p| !p.tables.is_empty() || p.page_number == 1)
        .collect()
}
