use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{ConfigValue, DeviceKind};

/// Static settings merged into every generated document of one device kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Device kind this template is written for.
    pub device: DeviceKind,
    /// Ordered key -> value settings. Values are strings, except for the
    /// known list-valued keys (e.g. `snmpTrapTable`).
    pub settings: IndexMap<String, ConfigValue>,
}
