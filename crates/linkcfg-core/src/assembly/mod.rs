pub mod derive;
pub mod overrides;
pub mod selection;

use crate::defaults::builtin::builtin;
use crate::defaults::schema::DefaultsTemplate;
use crate::error::LinkCfgError;
use crate::model::{ConfigDocument, DeviceKind, ExtractedField};
use derive::{add_preferred_ap_table, apply_scan_frequency_lists, apply_snmp_description};
use selection::{select_fields, Selection};

/// The defaults templates used for one assembly.
#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    pub ap: &'a DefaultsTemplate,
    pub sm: &'a DefaultsTemplate,
}

impl Templates<'static> {
    /// The bundled templates.
    pub fn builtin() -> Result<Self, LinkCfgError> {
        Ok(Templates {
            ap: builtin(DeviceKind::Ap)?,
            sm: builtin(DeviceKind::Sm)?,
        })
    }
}

impl<'a> Templates<'a> {
    pub fn for_device(&self, device: DeviceKind) -> &'a DefaultsTemplate {
        match device {
            DeviceKind::Ap => self.ap,
            DeviceKind::Sm => self.sm,
        }
    }
}

/// Build the AP and SM documents from one extraction pass.
///
/// Layers, later ones winning: selected extracted fields, the device's
/// defaults, derived fields (`snmpSystemDescription`; SM scan lists and
/// preferred-AP table). Form overrides are applied separately.
pub fn assemble(
    fields: &[ExtractedField],
    templates: &Templates<'_>,
    selection: Selection,
) -> (ConfigDocument, ConfigDocument) {
    let ap = build_base(fields, DeviceKind::Ap, templates, selection);
    let mut sm = build_base(fields, DeviceKind::Sm, templates, selection);

    apply_scan_frequency_lists(&mut sm);
    add_preferred_ap_table(&mut sm);

    log::debug!("assembled AP with {} keys, SM with {} keys", ap.len(), sm.len());
    (ap, sm)
}

fn build_base(
    fields: &[ExtractedField],
    device: DeviceKind,
    templates: &Templates<'_>,
    selection: Selection,
) -> ConfigDocument {
    let mut doc = select_fields(fields, device, selection);
    doc.overlay(&templates.for_device(device).settings);
    apply_snmp_description(&mut doc);
    doc
}
