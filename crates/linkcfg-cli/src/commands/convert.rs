use clap::{Args, ValueEnum};
use linkcfg_core::assembly::selection::{DuplicatePolicy, Selection};
use linkcfg_core::defaults::load_template;
use linkcfg_core::error::LinkCfgError;
use linkcfg_core::extraction::pdftotext::PdftotextExtractor;
use linkcfg_core::form::{load_form, DataVlanMode, LinkMode, NetworkForm};
use linkcfg_core::model::DeviceKind;
use linkcfg_core::output::{Conversion, OUTPUT_MIME};
use linkcfg_core::ConvertOptions;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::output;

#[derive(Clone, Copy, ValueEnum)]
pub enum DataVlanArg {
    Enable,
    Disable,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Point-to-point
    Ptp,
    /// Point-to-multipoint
    Ptmp,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SelectionArg {
    /// By label; per-site labels alternate AP then SM
    Keyed,
    /// Fixed positions in the extraction order (legacy)
    Positional,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DuplicatesArg {
    First,
    Last,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Link-budget PDF(s) or pre-extracted table JSON file(s)
    #[arg(required = true)]
    pub input_files: Vec<PathBuf>,

    /// JSON file with form values; flags below override it
    #[arg(long, value_name = "FILE")]
    pub form: Option<PathBuf>,

    /// AP management IP address
    #[arg(long)]
    pub ap_ip: Option<String>,

    /// SM management IP address
    #[arg(long)]
    pub sm_ip: Option<String>,

    /// Gateway IP address
    #[arg(long)]
    pub gateway: Option<String>,

    /// Subnet mask
    #[arg(long)]
    pub netmask: Option<String>,

    /// Management VLAN ID
    #[arg(long)]
    pub mgmt_vlan: Option<String>,

    /// SM data VLAN ID
    #[arg(long)]
    pub data_vlan: Option<String>,

    /// Tag SM data traffic with the data VLAN (default: disable)
    #[arg(long, value_enum)]
    pub data_vlan_mode: Option<DataVlanArg>,

    /// Link mode (default: ptp)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Directory to write ap.json / sm.json into
    #[arg(short = 'd', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// How extracted fields are split between AP and SM
    #[arg(long, value_enum, default_value = "keyed")]
    pub selection: SelectionArg,

    /// Which occurrence wins when a label repeats (keyed selection)
    #[arg(long, value_enum, default_value = "first")]
    pub duplicates: DuplicatesArg,

    /// Custom AP defaults template
    #[arg(long, value_name = "FILE")]
    pub ap_defaults: Option<PathBuf>,

    /// Custom SM defaults template
    #[arg(long, value_name = "FILE")]
    pub sm_defaults: Option<PathBuf>,

    /// Show results without writing files
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: ConvertArgs) -> Result<(), LinkCfgError> {
    let form = build_form(&args)?;
    let options = build_options(&args)?;
    let out_dirs = output_dirs(&args.out_dir, &args.input_files)?;
    super::ensure_pdf_backend(&args.input_files)?;
    let extractor = PdftotextExtractor::new();

    let mut missing: Option<Vec<String>> = None;

    for (input, dir) in args.input_files.iter().zip(&out_dirs) {
        let pages = super::read_pages(input, &extractor)?;
        let conversion = linkcfg_core::convert_pages(&pages, &form, &options)?;

        match args.output.as_str() {
            "json" => output::json::print(&conversion)?,
            _ => output::table::print_conversion(input, &conversion),
        }

        if !conversion.is_complete() {
            missing = Some(conversion.missing_fields().to_vec());
            continue;
        }

        if !args.dry_run {
            write_documents(dir, &conversion)?;
        }
    }

    if let Some(missing) = missing {
        return Err(LinkCfgError::IncompleteForm {
            missing: missing.join(", "),
        });
    }

    Ok(())
}

/// Form values from `--form`, overridden field by field by flags.
fn build_form(args: &ConvertArgs) -> Result<NetworkForm, LinkCfgError> {
    let mut form = match &args.form {
        Some(path) => load_form(path)?,
        None => NetworkForm::default(),
    };

    let text_flags = [
        (&args.ap_ip, &mut form.ap_ip),
        (&args.sm_ip, &mut form.sm_ip),
        (&args.gateway, &mut form.gateway),
        (&args.netmask, &mut form.netmask),
        (&args.mgmt_vlan, &mut form.mgmt_vlan),
        (&args.data_vlan, &mut form.data_vlan),
    ];
    for (flag, slot) in text_flags {
        if let Some(value) = flag {
            *slot = value.clone();
        }
    }

    if let Some(mode) = args.data_vlan_mode {
        form.data_vlan_mode = match mode {
            DataVlanArg::Enable => DataVlanMode::Enable,
            DataVlanArg::Disable => DataVlanMode::Disable,
        };
    }
    if let Some(mode) = args.mode {
        form.link_mode = match mode {
            ModeArg::Ptp => LinkMode::Ptp,
            ModeArg::Ptmp => LinkMode::Ptmp,
        };
    }

    Ok(form)
}

fn build_options(args: &ConvertArgs) -> Result<ConvertOptions, LinkCfgError> {
    let selection = match args.selection {
        SelectionArg::Positional => Selection::Positional,
        SelectionArg::Keyed => Selection::Keyed(match args.duplicates {
            DuplicatesArg::First => DuplicatePolicy::FirstWins,
            DuplicatesArg::Last => DuplicatePolicy::LastWins,
        }),
    };

    let ap_defaults = args
        .ap_defaults
        .as_deref()
        .map(|path| load_template(path, Some(DeviceKind::Ap)))
        .transpose()?;
    let sm_defaults = args
        .sm_defaults
        .as_deref()
        .map(|path| load_template(path, Some(DeviceKind::Sm)))
        .transpose()?;

    Ok(ConvertOptions {
        selection,
        ap_defaults,
        sm_defaults,
    })
}

fn write_documents(dir: &Path, conversion: &Conversion) -> Result<(), LinkCfgError> {
    std::fs::create_dir_all(dir)?;
    for device in DeviceKind::ALL {
        let path = dir.join(device.file_name());
        std::fs::write(&path, conversion.payload(device)?)?;
        eprintln!("{} config written to {} ({})", device, path.display(), OUTPUT_MIME);
    }
    Ok(())
}

/// Target directory per input: `out_dir` itself for a single input,
/// `out_dir/<file stem>` otherwise. Inputs sharing a stem are rejected.
fn output_dirs(out_dir: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>, LinkCfgError> {
    if inputs.len() <= 1 {
        return Ok(vec![out_dir.to_path_buf(); inputs.len()]);
    }

    let mut stems = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = file_stem(input);
            if !stems.insert(stem.clone()) {
                return Err(LinkCfgError::UnsupportedInput(format!(
                    "{}: another input is also named '{}'; its {} and {} would be overwritten",
                    input.display(),
                    stem,
                    DeviceKind::Ap.file_name(),
                    DeviceKind::Sm.file_name()
                )));
            }
            Ok(out_dir.join(stem))
        })
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_input_writes_into_out_dir() {
        let dirs = output_dirs(Path::new("out"), &[PathBuf::from("a/link.pdf")]).unwrap();
        assert_eq!(dirs, vec![PathBuf::from("out")]);
    }

    #[test]
    fn test_multiple_inputs_get_stem_dirs() {
        let inputs = [PathBuf::from("a/cmb-kdy.pdf"), PathBuf::from("b/cmb-gal.json")];
        let dirs = output_dirs(Path::new("out"), &inputs).unwrap();
        assert_eq!(
            dirs,
            vec![PathBuf::from("out/cmb-kdy"), PathBuf::from("out/cmb-gal")]
        );
    }

    #[test]
    fn test_same_stem_in_different_dirs_rejected() {
        let inputs = [PathBuf::from("a/link.pdf"), PathBuf::from("b/link.pdf")];
        assert!(matches!(
            output_dirs(Path::new("out"), &inputs),
            Err(LinkCfgError::UnsupportedInput(_))
        ));
    }
}
