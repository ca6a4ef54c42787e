use indexmap::IndexMap;

use crate::model::{keys, ConfigDocument, ConfigValue};

/// Pre-shared key written into the SM's preferred-AP entry.
pub const PREFERRED_AP_KEY: &str = "dialog_5.2cambium";

/// Security method code for the preferred-AP entry.
pub const PREFERRED_AP_SECURITY_METHOD: &str = "5";

/// Channel-width tier of an SM scan-frequency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTier {
    Twenty,
    Forty,
    Ten,
    Five,
}

impl ScanTier {
    pub const ALL: [ScanTier; 4] = [ScanTier::Twenty, ScanTier::Forty, ScanTier::Ten, ScanTier::Five];

    /// Tier for an internal bandwidth code.
    pub fn from_code(code: &str) -> Option<ScanTier> {
        match code {
            "1" => Some(ScanTier::Twenty),
            "2" => Some(ScanTier::Forty),
            "4" => Some(ScanTier::Ten),
            "8" => Some(ScanTier::Five),
            _ => None,
        }
    }

    pub fn list_key(self) -> &'static str {
        match self {
            ScanTier::Twenty => keys::SCAN_LIST_TWENTY,
            ScanTier::Forty => keys::SCAN_LIST_FORTY,
            ScanTier::Ten => keys::SCAN_LIST_TEN,
            ScanTier::Five => keys::SCAN_LIST_FIVE,
        }
    }
}

/// Copy `snmpSystemName` into `snmpSystemDescription` (empty if absent).
pub fn apply_snmp_description(doc: &mut ConfigDocument) {
    let name = doc.text(keys::SNMP_SYSTEM_NAME).unwrap_or_default().to_string();
    doc.set(keys::SNMP_SYSTEM_DESCRIPTION, name);
}

/// Express the SM operating frequency through the scan list of its bandwidth tier.
///
/// All four lists are reset to "". When both the bandwidth code and
/// `centerFrequency` are present, the list for the code receives the
/// frequency and the standalone `centerFrequency` key is removed (also when
/// the code has no tier).
pub fn apply_scan_frequency_lists(sm: &mut ConfigDocument) {
    let bandwidth = sm.text(keys::BANDWIDTH).unwrap_or_default().to_string();
    let frequency = sm
        .text(keys::CENTER_FREQUENCY)
        .unwrap_or_default()
        .to_string();

    for tier in ScanTier::ALL {
        sm.set(tier.list_key(), "");
    }

    if bandwidth.is_empty() || frequency.is_empty() {
        return;
    }

    match ScanTier::from_code(&bandwidth) {
        Some(tier) => sm.set(tier.list_key(), frequency),
        None => log::warn!(
            "SM: bandwidth code '{}' has no scan list; frequency {} dropped",
            bandwidth,
            frequency
        ),
    }
    sm.remove(keys::CENTER_FREQUENCY);
}

/// Add the single-entry preferred-AP table pointing the SM at its AP's SSID.
pub fn add_preferred_ap_table(sm: &mut ConfigDocument) {
    let ssid = sm.text(keys::SSID).unwrap_or_default().to_string();

    let mut entry = IndexMap::new();
    entry.insert("prefferedListTableEntrySSID".to_string(), ssid);
    entry.insert(
        "prefferedListTableEntryKEY".to_string(),
        PREFERRED_AP_KEY.to_string(),
    );
    entry.insert(
        "prefferedListTableSecurityMethod".to_string(),
        PREFERRED_AP_SECURITY_METHOD.to_string(),
    );
    entry.insert("prefferedListTableEntryBSSID".to_string(), String::new());

    sm.set(keys::PREFERRED_AP_TABLE, ConfigValue::Table(vec![entry]));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sm_with(bandwidth: Option<&str>, frequency: Option<&str>) -> ConfigDocument {
        let mut sm = ConfigDocument::new();
        if let Some(b) = bandwidth {
            sm.set(keys::BANDWIDTH, b);
        }
        if let Some(f) = frequency {
            sm.set(keys::CENTER_FREQUENCY, f);
        }
        sm
    }

    #[test]
    fn test_fan_out_ten() {
        let mut sm = sm_with(Some("4"), Some("5180"));
        apply_scan_frequency_lists(&mut sm);
        assert_eq!(sm.text(keys::SCAN_LIST_TEN), Some("5180"));
        assert_eq!(sm.text(keys::SCAN_LIST_TWENTY), Some(""));
        assert_eq!(sm.text(keys::SCAN_LIST_FORTY), Some(""));
        assert_eq!(sm.text(keys::SCAN_LIST_FIVE), Some(""));
        assert!(!sm.contains_key(keys::CENTER_FREQUENCY));
    }

    #[test]
    fn test_fan_out_each_tier() {
        for (code, key) in [
            ("1", keys::SCAN_LIST_TWENTY),
            ("2", keys::SCAN_LIST_FORTY),
            ("8", keys::SCAN_LIST_FIVE),
        ] {
            let mut sm = sm_with(Some(code), Some("5745"));
            apply_scan_frequency_lists(&mut sm);
            assert_eq!(sm.text(key), Some("5745"));
        }
    }

    #[test]
    fn test_fan_out_missing_bandwidth_keeps_frequency() {
        let mut sm = sm_with(None, Some("5180"));
        apply_scan_frequency_lists(&mut sm);
        for tier in ScanTier::ALL {
            assert_eq!(sm.text(tier.list_key()), Some(""));
        }
        assert_eq!(sm.text(keys::CENTER_FREQUENCY), Some("5180"));
    }

    #[test]
    fn test_fan_out_missing_frequency() {
        let mut sm = sm_with(Some("2"), None);
        apply_scan_frequency_lists(&mut sm);
        assert_eq!(sm.text(keys::SCAN_LIST_FORTY), Some(""));
    }

    #[test]
    fn test_fan_out_unknown_code_drops_frequency() {
        let mut sm = sm_with(Some("7"), Some("5180"));
        apply_scan_frequency_lists(&mut sm);
        for tier in ScanTier::ALL {
            assert_eq!(sm.text(tier.list_key()), Some(""));
        }
        assert!(!sm.contains_key(keys::CENTER_FREQUENCY));
    }

    #[test]
    fn test_preferred_ap_table_single_entry() {
        let mut sm = ConfigDocument::new();
        sm.set(keys::SSID, "Colombo-Kandy");
        add_preferred_ap_table(&mut sm);
        match sm.get(keys::PREFERRED_AP_TABLE) {
            Some(ConfigValue::Table(rows)) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0]["prefferedListTableEntrySSID"], "Colombo-Kandy");
                assert_eq!(rows[0]["prefferedListTableEntryKEY"], PREFERRED_AP_KEY);
                assert_eq!(rows[0]["prefferedListTableSecurityMethod"], "5");
                assert_eq!(rows[0]["prefferedListTableEntryBSSID"], "");
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_preferred_ap_table_without_ssid() {
        let mut sm = ConfigDocument::new();
        add_preferred_ap_table(&mut sm);
        match sm.get(keys::PREFERRED_AP_TABLE) {
            Some(ConfigValue::Table(rows)) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0]["prefferedListTableEntrySSID"], "");
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_snmp_description_copies_name() {
        let mut doc = ConfigDocument::new();
        doc.set(keys::SNMP_SYSTEM_NAME, "CMB-KDY-01");
        apply_snmp_description(&mut doc);
        assert_eq!(doc.text(keys::SNMP_SYSTEM_DESCRIPTION), Some("CMB-KDY-01"));

        let mut empty = ConfigDocument::new();
        apply_snmp_description(&mut empty);
        assert_eq!(empty.text(keys::SNMP_SYSTEM_DESCRIPTION), Some(""));
        assert_eq!(empty.text(keys::SNMP_SYSTEM_NAME), None);
    }
}
