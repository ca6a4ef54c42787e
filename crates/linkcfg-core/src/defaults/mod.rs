pub mod builtin;
pub mod schema;

use crate::error::LinkCfgError;
use crate::model::{keys, ConfigValue, DeviceKind};
use schema::DefaultsTemplate;
use std::path::Path;

/// Load a defaults template from a JSON file.
///
/// `expected` rejects a template written for the other device kind.
pub fn load_template(
    path: &Path,
    expected: Option<DeviceKind>,
) -> Result<DefaultsTemplate, LinkCfgError> {
    let content = std::fs::read_to_string(path).map_err(|e| LinkCfgError::TemplateLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let template: DefaultsTemplate =
        serde_json::from_str(&content).map_err(|e| LinkCfgError::TemplateLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_template(&template, expected)?;
    Ok(template)
}

/// Parse a defaults template from a JSON string (no file path context).
pub fn parse_template_str(
    json: &str,
    expected: Option<DeviceKind>,
) -> Result<DefaultsTemplate, LinkCfgError> {
    let template: DefaultsTemplate = serde_json::from_str(json).map_err(LinkCfgError::Json)?;
    validate_template(&template, expected)?;
    Ok(template)
}

/// Validate that a template is well-formed.
pub fn validate_template(
    template: &DefaultsTemplate,
    expected: Option<DeviceKind>,
) -> Result<(), LinkCfgError> {
    if template.name.trim().is_empty() {
        return Err(LinkCfgError::TemplateInvalid(
            "name must not be empty".into(),
        ));
    }

    if let Some(expected) = expected {
        if template.device != expected {
            return Err(LinkCfgError::TemplateInvalid(format!(
                "template '{}' is for {} but was given as the {} template",
                template.name, template.device, expected
            )));
        }
    }

    if template.settings.is_empty() {
        return Err(LinkCfgError::TemplateInvalid(
            "settings must not be empty".into(),
        ));
    }

    for (key, value) in &template.settings {
        if key.trim().is_empty() {
            return Err(LinkCfgError::TemplateInvalid(
                "setting keys must not be empty".into(),
            ));
        }

        if let ConfigValue::Table(_) = value {
            if !is_list_key(key, template.device) {
                return Err(LinkCfgError::TemplateInvalid(format!(
                    "setting '{}' must be a string (only {} may hold a list on {})",
                    key,
                    list_keys(template.device).join(", "),
                    template.device
                )));
            }
        }
    }

    Ok(())
}

/// Keys whose value is a list of records rather than a string.
pub fn list_keys(device: DeviceKind) -> &'static [&'static str] {
    match device {
        DeviceKind::Ap => &[keys::SNMP_TRAP_TABLE],
        DeviceKind::Sm => &[keys::SNMP_TRAP_TABLE, keys::PREFERRED_AP_TABLE],
    }
}

fn is_list_key(key: &str, device: DeviceKind) -> bool {
    list_keys(device).contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_template() {
        let json = r#"{
            "name": "Test AP",
            "version": "1.0",
            "device": "ap",
            "settings": {
                "networkBridgeMTU": "1500",
                "snmpTrapTable": [{"snmpTrapEntryIP": "10.0.0.1", "snmpTrapEntryPort": "162"}]
            }
        }"#;
        let t = parse_template_str(json, Some(DeviceKind::Ap)).unwrap();
        assert_eq!(t.name, "Test AP");
        assert_eq!(t.settings.len(), 2);
        assert_eq!(
            t.settings.keys().collect::<Vec<_>>(),
            vec!["networkBridgeMTU", "snmpTrapTable"]
        );
    }

    #[test]
    fn test_wrong_device_rejected() {
        let json = r#"{
            "name": "Test SM",
            "version": "1.0",
            "device": "sm",
            "settings": { "networkBridgeMTU": "1500" }
        }"#;
        assert!(parse_template_str(json, Some(DeviceKind::Ap)).is_err());
        assert!(parse_template_str(json, None).is_ok());
    }

    #[test]
    fn test_empty_settings_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "device": "ap", "settings": {} }"#;
        assert!(parse_template_str(json, None).is_err());
    }

    #[test]
    fn test_list_under_unknown_key_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "device": "ap",
            "settings": { "ntpServers": [{"ip": "10.0.0.1"}] }
        }"#;
        assert!(matches!(
            parse_template_str(json, None),
            Err(LinkCfgError::TemplateInvalid(_))
        ));
    }

    #[test]
    fn test_preferred_ap_table_only_on_sm() {
        let template = |device: &str| {
            format!(
                r#"{{
                    "name": "T",
                    "version": "1.0",
                    "device": "{device}",
                    "settings": {{ "prefferedAPTable": [] }}
                }}"#
            )
        };
        assert!(parse_template_str(&template("sm"), None).is_ok());
        assert!(parse_template_str(&template("ap"), None).is_err());
    }

    #[test]
    fn test_nested_record_values_must_be_strings() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "device": "ap",
            "settings": { "snmpTrapTable": [{"snmpTrapEntryPort": 161}] }
        }"#;
        assert!(parse_template_str(json, None).is_err());
    }

    #[test]
    fn test_load_template_missing_file() {
        let err = load_template(Path::new("/nonexistent/ap.json"), None).unwrap_err();
        assert!(matches!(err, LinkCfgError::TemplateLoad { .. }));
    }
}
