use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical configuration keys the extractor and assembler work with.
pub mod keys {
    pub const DEVICE_NAME: &str = "systemConfigDeviceName";
    pub const LATITUDE: &str = "systemDeviceLocLatitude";
    pub const LONGITUDE: &str = "systemDeviceLocLongitude";
    pub const HEIGHT: &str = "systemDeviceLocHeight";
    pub const BANDWIDTH: &str = "wirelessInterfaceScanFrequencyBandwidth";
    pub const SSID: &str = "wirelessInterfaceSSID";
    pub const TX_POWER: &str = "wirelessInterfaceTXPower";
    pub const SNMP_SYSTEM_NAME: &str = "snmpSystemName";
    pub const SNMP_SYSTEM_DESCRIPTION: &str = "snmpSystemDescription";
    pub const CENTER_FREQUENCY: &str = "centerFrequency";

    pub const SCAN_LIST_TWENTY: &str = "wirelessInterfaceScanFrequencyListTwenty";
    pub const SCAN_LIST_FORTY: &str = "wirelessInterfaceScanFrequencyListForty";
    pub const SCAN_LIST_TEN: &str = "wirelessInterfaceScanFrequencyListTen";
    pub const SCAN_LIST_FIVE: &str = "wirelessInterfaceScanFrequencyListFive";

    pub const SNMP_TRAP_TABLE: &str = "snmpTrapTable";
    pub const PREFERRED_AP_TABLE: &str = "prefferedAPTable";

    pub const BRIDGE_IP: &str = "networkBridgeIPAddr";
    pub const BRIDGE_GATEWAY: &str = "networkBridgeGatewayIP";
    pub const BRIDGE_NETMASK: &str = "networkBridgeNetmask";
    pub const MGMT_VLAN_ID: &str = "mgmtVLANVID";
    pub const DATA_VLAN_ENABLE: &str = "dataVLANEnable";
    pub const DATA_VLAN_ID: &str = "dataVLANVID";
    pub const PROTOCOL_MODE: &str = "wirelessInterfaceProtocolMode";
}

/// Which of the two generated devices a document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Ap,
    Sm,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 2] = [DeviceKind::Ap, DeviceKind::Sm];

    /// Fixed output file name for this device's configuration.
    pub fn file_name(self) -> &'static str {
        match self {
            DeviceKind::Ap => "ap.json",
            DeviceKind::Sm => "sm.json",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<DeviceKind> {
        match s.trim().to_lowercase().as_str() {
            "ap" | "access-point" | "access_point" => Some(DeviceKind::Ap),
            "sm" | "subscriber-module" | "subscriber_module" => Some(DeviceKind::Sm),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Ap => write!(f, "AP"),
            DeviceKind::Sm => write!(f, "SM"),
        }
    }
}

/// One of the fixed labels searched for in the link-budget tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLabel {
    Master,
    Slave,
    Latitude,
    Longitude,
    #[serde(rename = "Antenna Height")]
    AntennaHeight,
    #[serde(rename = "Channel Bandwidth")]
    ChannelBandwidth,
    #[serde(rename = "AP SSID")]
    ApSsid,
    #[serde(rename = "Transmitter Output Power")]
    TransmitterOutputPower,
    #[serde(rename = "System Name")]
    SystemName,
    Frequency,
}

impl TargetLabel {
    /// Labels in match order.
    pub const ALL: [TargetLabel; 10] = [
        TargetLabel::Master,
        TargetLabel::Slave,
        TargetLabel::Latitude,
        TargetLabel::Longitude,
        TargetLabel::AntennaHeight,
        TargetLabel::ChannelBandwidth,
        TargetLabel::ApSsid,
        TargetLabel::TransmitterOutputPower,
        TargetLabel::SystemName,
        TargetLabel::Frequency,
    ];

    /// Label text as printed in the report.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetLabel::Master => "Master",
            TargetLabel::Slave => "Slave",
            TargetLabel::Latitude => "Latitude",
            TargetLabel::Longitude => "Longitude",
            TargetLabel::AntennaHeight => "Antenna Height",
            TargetLabel::ChannelBandwidth => "Channel Bandwidth",
            TargetLabel::ApSsid => "AP SSID",
            TargetLabel::TransmitterOutputPower => "Transmitter Output Power",
            TargetLabel::SystemName => "System Name",
            TargetLabel::Frequency => "Frequency",
        }
    }

    /// Whether the report prints this label once for each end of the link.
    pub fn is_per_site(self) -> bool {
        matches!(
            self,
            TargetLabel::Latitude
                | TargetLabel::Longitude
                | TargetLabel::AntennaHeight
                | TargetLabel::TransmitterOutputPower
        )
    }

    /// Configuration key the label's value is stored under.
    pub fn canonical_key(self) -> &'static str {
        match self {
            TargetLabel::Master | TargetLabel::Slave => keys::DEVICE_NAME,
            TargetLabel::Latitude => keys::LATITUDE,
            TargetLabel::Longitude => keys::LONGITUDE,
            TargetLabel::AntennaHeight => keys::HEIGHT,
            TargetLabel::ChannelBandwidth => keys::BANDWIDTH,
            TargetLabel::ApSsid => keys::SSID,
            TargetLabel::TransmitterOutputPower => keys::TX_POWER,
            TargetLabel::SystemName => keys::SNMP_SYSTEM_NAME,
            TargetLabel::Frequency => keys::CENTER_FREQUENCY,
        }
    }
}

impl fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled value found in the report, already normalized for its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedField {
    /// Label that matched the cell.
    pub label: TargetLabel,
    /// Canonical configuration key.
    pub field: String,
    /// Normalized value.
    pub value: String,
}

/// A configuration value: either a plain string or a list of flat records
/// (SNMP trap entries, preferred-AP entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Table(Vec<IndexMap<String, String>>),
}

impl ConfigValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Table(_) => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::Table(rows) => write!(f, "[{} entries]", rows.len()),
        }
    }
}

/// An insertion-ordered device configuration.
///
/// Re-setting an existing key keeps its position; new keys are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(IndexMap<String, ConfigValue>);

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// String value for `key`, `None` if absent or a table.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(ConfigValue::as_text)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy every entry of `settings` into the document, overwriting on collision.
    pub fn overlay(&mut self, settings: &IndexMap<String, ConfigValue>) {
        for (key, value) in settings {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
