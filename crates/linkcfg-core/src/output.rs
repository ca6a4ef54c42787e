use serde::Serialize;

use crate::error::LinkCfgError;
use crate::model::{keys, ConfigDocument, ConfigValue, DeviceKind, ExtractedField};
use crate::parsing::normalize::bandwidth_mhz;

/// MIME type of the generated configuration files.
pub const OUTPUT_MIME: &str = "application/json";

/// Payload offered while the form is incomplete.
pub const DISABLED_PAYLOAD: &str = "{}";

/// Keys shown in the preview. Entries appear in document order.
pub const PREVIEW_KEYS: [&str; 10] = [
    keys::DEVICE_NAME,
    keys::LATITUDE,
    keys::LONGITUDE,
    keys::HEIGHT,
    keys::SSID,
    keys::BANDWIDTH,
    keys::TX_POWER,
    keys::CENTER_FREQUENCY,
    keys::SNMP_SYSTEM_NAME,
    keys::SNMP_SYSTEM_DESCRIPTION,
];

/// Whether the form allowed the documents to be finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormStatus {
    Complete,
    /// Overrides were skipped; `missing` lists the empty required fields.
    Incomplete { missing: Vec<String> },
}

/// Result of converting one report.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub fields: Vec<ExtractedField>,
    pub ap: ConfigDocument,
    pub sm: ConfigDocument,
    pub form: FormStatus,
}

impl Conversion {
    pub fn document(&self, device: DeviceKind) -> &ConfigDocument {
        match device {
            DeviceKind::Ap => &self.ap,
            DeviceKind::Sm => &self.sm,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.form == FormStatus::Complete
    }

    /// Names of required form fields that were empty.
    pub fn missing_fields(&self) -> &[String] {
        match &self.form {
            FormStatus::Complete => &[],
            FormStatus::Incomplete { missing } => missing,
        }
    }

    /// File content for `device`: the wrapped document, or `{}` while the
    /// form is incomplete.
    pub fn payload(&self, device: DeviceKind) -> Result<String, LinkCfgError> {
        if !self.is_complete() {
            return Ok(DISABLED_PAYLOAD.to_string());
        }
        device_props_json(self.document(device))
    }

    pub fn preview(&self, device: DeviceKind) -> ConfigDocument {
        preview(self.document(device))
    }
}

#[derive(Serialize)]
struct DeviceProps<'a> {
    device_props: &'a ConfigDocument,
}

/// Serialize `doc` as `{"device_props": doc}` with 4-space indentation.
pub fn device_props_json(doc: &ConfigDocument) -> Result<String, LinkCfgError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    DeviceProps { device_props: doc }.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read-only projection of the preview keys, with the bandwidth code shown in MHz.
pub fn preview(doc: &ConfigDocument) -> ConfigDocument {
    let mut out = ConfigDocument::new();
    for (key, value) in doc.iter() {
        if !PREVIEW_KEYS.contains(&key) {
            continue;
        }
        let shown = match (key, value) {
            (keys::BANDWIDTH, ConfigValue::Text(code)) => {
                ConfigValue::from(bandwidth_mhz(code).unwrap_or(code.as_str()))
            }
            _ => value.clone(),
        };
        out.set(key, shown);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ConfigDocument {
        let mut doc = ConfigDocument::new();
        doc.set(keys::DEVICE_NAME, "CMB-AP-01");
        doc.set(keys::BANDWIDTH, "2");
        doc.set("networkBridgeMTU", "1700");
        doc.set(keys::SNMP_SYSTEM_NAME, "CMB-KDY");
        doc
    }

    #[test]
    fn test_device_props_four_space_indent() {
        let mut d = ConfigDocument::new();
        d.set("acsEnable", "0");
        let json = device_props_json(&d).unwrap();
        assert_eq!(json, "{\n    \"device_props\": {\n        \"acsEnable\": \"0\"\n    }\n}");
    }

    #[test]
    fn test_device_props_nested_table() {
        let mut d = ConfigDocument::new();
        let mut entry = indexmap::IndexMap::new();
        entry.insert("snmpTrapEntryIP".to_string(), "10.0.0.1".to_string());
        d.set(keys::SNMP_TRAP_TABLE, ConfigValue::Table(vec![entry]));
        let value: serde_json::Value =
            serde_json::from_str(&device_props_json(&d).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"device_props": {"snmpTrapTable": [{"snmpTrapEntryIP": "10.0.0.1"}]}})
        );
    }

    #[test]
    fn test_preview_filters_and_maps_bandwidth() {
        let p = preview(&doc());
        assert_eq!(
            p.keys().collect::<Vec<_>>(),
            vec![keys::DEVICE_NAME, keys::BANDWIDTH, keys::SNMP_SYSTEM_NAME]
        );
        assert_eq!(p.text(keys::BANDWIDTH), Some("40"));
    }

    #[test]
    fn test_preview_does_not_touch_document() {
        let d = doc();
        let _ = preview(&d);
        assert_eq!(d.text(keys::BANDWIDTH), Some("2"));
    }

    #[test]
    fn test_preview_unknown_code_shown_verbatim() {
        let mut d = ConfigDocument::new();
        d.set(keys::BANDWIDTH, "7");
        assert_eq!(preview(&d).text(keys::BANDWIDTH), Some("7"));
    }

    #[test]
    fn test_incomplete_payload_is_empty_object() {
        let conversion = Conversion {
            fields: vec![],
            ap: doc(),
            sm: doc(),
            form: FormStatus::Incomplete {
                missing: vec!["AP IP".into()],
            },
        };
        assert_eq!(conversion.payload(DeviceKind::Ap).unwrap(), "{}");
        assert_eq!(conversion.payload(DeviceKind::Sm).unwrap(), "{}");
        assert_eq!(conversion.missing_fields(), ["AP IP".to_string()]);
    }
}
