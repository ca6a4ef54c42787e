use crate::form::{DataVlanMode, LinkMode, NetworkForm};
use crate::model::{keys, ConfigDocument};

/// Write the user's network parameters into both documents.
///
/// Callers apply this only to a complete form.
pub fn apply_overrides(ap: &mut ConfigDocument, sm: &mut ConfigDocument, form: &NetworkForm) {
    ap.set(keys::BRIDGE_IP, form.ap_ip.as_str());
    sm.set(keys::BRIDGE_IP, form.sm_ip.as_str());

    for (key, value) in [
        (keys::BRIDGE_GATEWAY, &form.gateway),
        (keys::BRIDGE_NETMASK, &form.netmask),
        (keys::MGMT_VLAN_ID, &form.mgmt_vlan),
    ] {
        ap.set(key, value.as_str());
        sm.set(key, value.as_str());
    }

    if !form.data_vlan.is_empty() {
        sm.set(keys::DATA_VLAN_ID, form.data_vlan.as_str());
    }
    let data_vlan_enable = match form.data_vlan_mode {
        DataVlanMode::Enable => "1",
        DataVlanMode::Disable => "0",
    };
    sm.set(keys::DATA_VLAN_ENABLE, data_vlan_enable);

    let protocol_mode = match form.link_mode {
        LinkMode::Ptp => "4",
        LinkMode::Ptmp => "1",
    };
    ap.set(keys::PROTOCOL_MODE, protocol_mode);
}
