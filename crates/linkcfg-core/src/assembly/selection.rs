use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{ConfigDocument, DeviceKind, ExtractedField, TargetLabel};

/// 1-based positions into the extraction sequence taken by the AP document
/// in positional mode.
pub const AP_POSITIONS: [usize; 9] = [1, 3, 4, 5, 10, 11, 12, 13, 14];

/// 1-based positions taken by the SM document in positional mode.
pub const SM_POSITIONS: [usize; 8] = [2, 6, 7, 8, 10, 16, 17, 18];

/// Which occurrence of a label is kept when the report repeats it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    FirstWins,
    LastWins,
}

/// How extracted fields are distributed over the two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Select by source label and site (see `site_fields`), then keep one
    /// record per label.
    Keyed(DuplicatePolicy),
    /// Select by fixed position in the extraction sequence
    /// (`AP_POSITIONS` / `SM_POSITIONS`). Positions past the end are skipped.
    Positional,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Keyed(DuplicatePolicy::default())
    }
}

/// Build the extraction layer of `device`'s document.
pub fn select_fields(
    fields: &[ExtractedField],
    device: DeviceKind,
    selection: Selection,
) -> ConfigDocument {
    let mut doc = ConfigDocument::new();

    match selection {
        Selection::Keyed(policy) => {
            let own = site_fields(fields, device);
            for field in dedupe_by_label(&own, device, policy) {
                doc.set(field.field.as_str(), field.value.as_str());
            }
        }
        Selection::Positional => {
            let positions: &[usize] = match device {
                DeviceKind::Ap => &AP_POSITIONS,
                DeviceKind::Sm => &SM_POSITIONS,
            };
            for &pos in positions {
                match fields.get(pos - 1) {
                    Some(field) => doc.set(field.field.as_str(), field.value.as_str()),
                    None => log::debug!(
                        "{}: position {} skipped, only {} field(s) extracted",
                        device,
                        pos,
                        fields.len()
                    ),
                }
            }
        }
    }

    doc
}

/// Records describing `device`'s end of the link, in extraction order.
///
/// `Master` belongs to the AP and `Slave` to the SM. Per-site labels
/// alternate between the ends starting with the AP; one printed only once
/// applies to both. All other labels are shared.
pub fn site_fields(fields: &[ExtractedField], device: DeviceKind) -> Vec<&ExtractedField> {
    let mut totals: HashMap<TargetLabel, usize> = HashMap::new();
    for field in fields {
        *totals.entry(field.label).or_default() += 1;
    }

    let mut seen: HashMap<TargetLabel, usize> = HashMap::new();
    fields
        .iter()
        .filter(|field| {
            let occurrence = seen.entry(field.label).or_default();
            let index = *occurrence;
            *occurrence += 1;

            match field.label {
                TargetLabel::Master => device == DeviceKind::Ap,
                TargetLabel::Slave => device == DeviceKind::Sm,
                label if label.is_per_site() => {
                    totals.get(&label) == Some(&1) || site_of(index) == device
                }
                _ => true,
            }
        })
        .collect()
}

fn site_of(occurrence: usize) -> DeviceKind {
    if occurrence % 2 == 0 {
        DeviceKind::Ap
    } else {
        DeviceKind::Sm
    }
}

/// Reduce records to at most one per label.
///
/// Records keep the position of the label's first occurrence; `policy`
/// decides whose value is kept. Dropped duplicates are logged.
pub fn dedupe_by_label<'a>(
    fields: &[&'a ExtractedField],
    device: DeviceKind,
    policy: DuplicatePolicy,
) -> Vec<&'a ExtractedField> {
    let mut kept: Vec<&'a ExtractedField> = Vec::new();
    let mut slot_of: HashMap<TargetLabel, usize> = HashMap::new();
    let mut seen: HashMap<TargetLabel, usize> = HashMap::new();

    for &field in fields {
        *seen.entry(field.label).or_default() += 1;
        match slot_of.get(&field.label) {
            Some(&slot) => {
                if policy == DuplicatePolicy::LastWins {
                    kept[slot] = field;
                }
            }
            None => {
                slot_of.insert(field.label, kept.len());
                kept.push(field);
            }
        }
    }

    for label in TargetLabel::ALL {
        if let Some(&count) = seen.get(&label) {
            if count > 1 {
                let which = match policy {
                    DuplicatePolicy::FirstWins => "first",
                    DuplicatePolicy::LastWins => "last",
                };
                log::warn!(
                    "{}: label '{}' found {} times; keeping the {} occurrence",
                    device,
                    label,
                    count,
                    which
                );
            }
        }
    }

    kept
}
