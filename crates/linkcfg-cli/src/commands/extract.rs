use linkcfg_core::error::LinkCfgError;
use linkcfg_core::extraction::pdftotext::PdftotextExtractor;
use linkcfg_core::parsing::extract_fields;
use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), LinkCfgError> {
    super::ensure_pdf_backend(std::slice::from_ref(&input_file))?;
    let extractor = PdftotextExtractor::new();
    let pages = super::read_pages(&input_file, &extractor)?;
    let fields = extract_fields(&pages);

    match output_format {
        "json" => output::json::print_fields(&fields)?,
        _ => output::table::print_fields(&input_file, &fields),
    }

    Ok(())
}
