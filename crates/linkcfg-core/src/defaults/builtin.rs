use std::sync::LazyLock;

use crate::defaults::parse_template_str;
use crate::defaults::schema::DefaultsTemplate;
use crate::error::LinkCfgError;
use crate::model::DeviceKind;

const AP_DEFAULTS_JSON: &str = include_str!("../../../../defaults/ap.json");
const SM_DEFAULTS_JSON: &str = include_str!("../../../../defaults/sm.json");

// Parsed once per process and shared read-only afterwards.
static BUILTIN_AP: LazyLock<Result<DefaultsTemplate, String>> =
    LazyLock::new(|| parse_builtin(AP_DEFAULTS_JSON, DeviceKind::Ap));
static BUILTIN_SM: LazyLock<Result<DefaultsTemplate, String>> =
    LazyLock::new(|| parse_builtin(SM_DEFAULTS_JSON, DeviceKind::Sm));

/// The bundled defaults template for `device`.
pub fn builtin(device: DeviceKind) -> Result<&'static DefaultsTemplate, LinkCfgError> {
    let slot = match device {
        DeviceKind::Ap => &*BUILTIN_AP,
        DeviceKind::Sm => &*BUILTIN_SM,
    };
    slot.as_ref().map_err(|reason| {
        LinkCfgError::TemplateInvalid(format!("bundled {} template: {}", device, reason))
    })
}

fn parse_builtin(json: &str, device: DeviceKind) -> Result<DefaultsTemplate, String> {
    parse_template_str(json, Some(device)).map_err(|e| e.to_string())
}
