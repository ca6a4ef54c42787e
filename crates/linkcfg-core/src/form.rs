use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LinkCfgError;

/// Whether SM data traffic is tagged with `data_vlan`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataVlanMode {
    Enable,
    #[default]
    Disable,
}

/// Link topology the AP is configured for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// Point-to-point.
    #[default]
    Ptp,
    /// Point-to-multipoint.
    Ptmp,
}

/// Network parameters supplied by the user alongside the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkForm {
    pub ap_ip: String,
    pub sm_ip: String,
    pub gateway: String,
    pub netmask: String,
    pub mgmt_vlan: String,
    pub data_vlan: String,
    pub data_vlan_mode: DataVlanMode,
    pub link_mode: LinkMode,
}

impl NetworkForm {
    /// Required fields with their display names, in display order.
    pub fn required_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("AP IP", self.ap_ip.as_str()),
            ("SM IP", self.sm_ip.as_str()),
            ("Gateway IP", self.gateway.as_str()),
            ("Subnet Mask", self.netmask.as_str()),
            ("Management VLAN", self.mgmt_vlan.as_str()),
        ]
    }

    /// Display names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Load form values from a JSON file. Absent keys take their defaults.
pub fn load_form(path: &Path) -> Result<NetworkForm, LinkCfgError> {
    let content = std::fs::read_to_string(path).map_err(|e| LinkCfgError::FormLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| LinkCfgError::FormLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
