use linkcfg_core::error::LinkCfgError;
use linkcfg_core::model::ExtractedField;
use linkcfg_core::output::Conversion;

pub fn print(conversion: &Conversion) -> Result<(), LinkCfgError> {
    let json = serde_json::to_string_pretty(conversion)?;
    println!("{json}");
    Ok(())
}

pub fn print_fields(fields: &[ExtractedField]) -> Result<(), LinkCfgError> {
    let json = serde_json::to_string_pretty(fields)?;
    println!("{json}");
    Ok(())
}
