use linkcfg_core::model::{ConfigDocument, DeviceKind, ExtractedField};
use linkcfg_core::output::Conversion;
use std::path::Path;

pub fn print_conversion(input: &Path, conversion: &Conversion) {
    println!("--- {} ---\n", input.display());
    println!(
        "  PDF converted successfully ({} labeled fields)\n",
        conversion.fields.len()
    );

    if !conversion.is_complete() {
        println!(
            "  Please fill all required fields: {}\n",
            conversion.missing_fields().join(", ")
        );
        return;
    }

    for device in DeviceKind::ALL {
        println!("=== {} Configuration Preview ===\n", device);
        print_document(&conversion.preview(device));
        println!();
    }
}

pub fn print_fields(input: &Path, fields: &[ExtractedField]) {
    println!("--- {} ---\n", input.display());

    if fields.is_empty() {
        println!("  No labeled fields found.");
        return;
    }

    let max_label = fields
        .iter()
        .map(|f| f.label.as_str().len())
        .max()
        .unwrap_or(10);
    let max_field = fields.iter().map(|f| f.field.len()).max().unwrap_or(10);

    for f in fields {
        println!(
            "  {:<lw$}  {:<fw$}  {}",
            f.label.as_str(),
            f.field,
            f.value,
            lw = max_label,
            fw = max_field
        );
    }
    println!("\n  {} fields", fields.len());
}

fn print_document(doc: &ConfigDocument) {
    let width = doc.keys().map(str::len).max().unwrap_or(10);
    for (key, value) in doc.iter() {
        println!("  {:<width$}  {}", key, value, width = width);
    }
}
