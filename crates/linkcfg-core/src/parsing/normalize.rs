use crate::model::keys;
use crate::parsing::values::canonical_number;

/// Unit suffixes stripped from raw values, checked in order.
pub const UNIT_SUFFIXES: [&str; 3] = [" meters AGL", " MHz", " dBm"];

/// Vendor channel width in MHz -> internal bandwidth code.
const BANDWIDTH_CODES: [(&str, &str); 4] = [("20", "1"), ("40", "2"), ("10", "4"), ("5", "8")];

/// Normalize a raw value from the report into the form `key` expects.
///
/// Steps:
/// 1. Trim
/// 2. Strip the first matching unit suffix
/// 3. Key-specific cleanup: compass letter removal for coordinates, numeric
///    canonicalization for coordinates/height/power/frequency, bandwidth
///    code translation
///
/// Values that fail to parse as numbers pass through unchanged.
pub fn normalize_value(raw: &str, key: Option<&str>) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut value = strip_unit(raw.trim()).to_string();

    match key {
        Some(keys::LATITUDE | keys::LONGITUDE) => {
            let stripped = strip_compass(&value);
            value = canonical_number(stripped).unwrap_or_else(|| stripped.to_string());
        }
        Some(keys::HEIGHT | keys::TX_POWER | keys::CENTER_FREQUENCY) => {
            if let Some(n) = canonical_number(&value) {
                value = n;
            }
        }
        Some(keys::BANDWIDTH) => {
            if let Some(code) = bandwidth_code(&value) {
                value = code.to_string();
            }
        }
        _ => {}
    }

    value.trim().to_string()
}

/// Internal bandwidth code for a channel width in MHz.
pub fn bandwidth_code(mhz: &str) -> Option<&'static str> {
    BANDWIDTH_CODES
        .iter()
        .find(|(m, _)| *m == mhz)
        .map(|(_, code)| *code)
}

/// Channel width in MHz for an internal bandwidth code (display only).
pub fn bandwidth_mhz(code: &str) -> Option<&'static str> {
    BANDWIDTH_CODES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(mhz, _)| *mhz)
}

fn strip_unit(value: &str) -> &str {
    for unit in UNIT_SUFFIXES {
        if let Some(rest) = value.strip_suffix(unit) {
            return rest.trim();
        }
    }
    value
}

/// Drop a trailing hemisphere letter: "6.9270N" -> "6.9270".
fn strip_compass(value: &str) -> &str {
    match value.strip_suffix(['N', 'S', 'E', 'W']) {
        Some(rest) => rest.trim(),
        None => value,
    }
}
