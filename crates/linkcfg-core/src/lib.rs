pub mod assembly;
pub mod defaults;
pub mod error;
pub mod extraction;
pub mod form;
pub mod model;
pub mod output;
pub mod parsing;

use assembly::overrides::apply_overrides;
use assembly::selection::Selection;
use assembly::Templates;
use defaults::builtin::builtin;
use defaults::schema::DefaultsTemplate;
use error::LinkCfgError;
use extraction::{PageTables, TableExtractor};
use form::NetworkForm;
use model::{DeviceKind, ExtractedField};
use output::{Conversion, FormStatus};

/// Options controlling document assembly.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// How extracted fields are split between AP and SM.
    pub selection: Selection,
    /// Replaces the bundled AP defaults when set.
    pub ap_defaults: Option<DefaultsTemplate>,
    /// Replaces the bundled SM defaults when set.
    pub sm_defaults: Option<DefaultsTemplate>,
}

impl ConvertOptions {
    /// Templates in effect: the custom ones where given, bundled otherwise.
    pub fn templates(&self) -> Result<Templates<'_>, LinkCfgError> {
        let ap = match &self.ap_defaults {
            Some(t) => t,
            None => builtin(DeviceKind::Ap)?,
        };
        let sm = match &self.sm_defaults {
            Some(t) => t,
            None => builtin(DeviceKind::Sm)?,
        };
        Ok(Templates { ap, sm })
    }
}

/// Main API entry point: convert one link-budget PDF into AP and SM documents.
///
/// Extraction failures propagate; everything after extraction is lenient.
pub fn convert_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn TableExtractor,
    form: &NetworkForm,
    options: &ConvertOptions,
) -> Result<Conversion, LinkCfgError> {
    let pages = extractor.extract_tables(pdf_bytes)?;
    log::info!(
        "{}: {} page(s) extracted",
        extractor.backend_name(),
        pages.len()
    );
    convert_pages(&pages, form, options)
}

/// Convert already-extracted tables (e.g. from a pre-extracted JSON file).
pub fn convert_pages(
    pages: &[PageTables],
    form: &NetworkForm,
    options: &ConvertOptions,
) -> Result<Conversion, LinkCfgError> {
    let fields = parsing::extract_fields(pages);
    log::info!("{} labeled field(s) found", fields.len());

    let templates = options.templates()?;
    let (mut ap, mut sm) = assembly::assemble(&fields, &templates, options.selection);

    let missing = form.missing_fields();
    let status = if missing.is_empty() {
        apply_overrides(&mut ap, &mut sm, form);
        FormStatus::Complete
    } else {
        log::warn!(
            "form incomplete, overrides skipped: {}",
            missing.join(", ")
        );
        FormStatus::Incomplete {
            missing: missing.into_iter().map(String::from).collect(),
        }
    };

    Ok(Conversion {
        fields,
        ap,
        sm,
        form: status,
    })
}

/// Extract the labeled fields from a PDF without assembling documents.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn TableExtractor,
) -> Result<Vec<ExtractedField>, LinkCfgError> {
    let pages = extractor.extract_tables(pdf_bytes)?;
    Ok(parsing::extract_fields(&pages))
}
