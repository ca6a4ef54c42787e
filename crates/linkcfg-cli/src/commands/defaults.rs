use linkcfg_core::defaults::builtin::builtin;
use linkcfg_core::defaults::load_template;
use linkcfg_core::error::LinkCfgError;
use linkcfg_core::model::DeviceKind;
use std::path::Path;

pub fn list() -> Result<(), LinkCfgError> {
    for device in DeviceKind::ALL {
        let template = builtin(device)?;
        println!(
            "  {:<3} {} (v{}, {} settings)",
            device.to_string(),
            template.name,
            template.version,
            template.settings.len()
        );
        if let Some(ref desc) = template.description {
            println!("      {desc}");
        }
    }
    Ok(())
}

pub fn show(device: &str) -> Result<(), LinkCfgError> {
    let device = DeviceKind::from_str_loose(device).ok_or_else(|| {
        LinkCfgError::UnsupportedInput(format!("unknown device '{device}' (expected ap or sm)"))
    })?;
    let template = builtin(device)?;
    let json = serde_json::to_string_pretty(&template.settings)?;
    println!("{json}");
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LinkCfgError> {
    let template = load_template(file, None)?;

    println!("Template '{}' is valid.", template.name);
    println!("  Device:   {}", template.device);
    println!("  Version:  {}", template.version);
    println!("  Settings: {}", template.settings.len());

    let bundled = builtin(template.device)?;
    let absent: Vec<&str> = bundled
        .settings
        .keys()
        .filter(|key| !template.settings.contains_key(*key))
        .map(String::as_str)
        .collect();

    if !absent.is_empty() {
        println!(
            "  Warning: {} bundled {} settings not set: {}",
            absent.len(),
            template.device,
            absent.join(", ")
        );
    }

    Ok(())
}
