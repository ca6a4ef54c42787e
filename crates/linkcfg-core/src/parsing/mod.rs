pub mod normalize;
pub mod values;

use crate::extraction::{PageTables, Row};
use crate::model::{ExtractedField, TargetLabel};
use normalize::normalize_value;

/// Scan every table row for the target labels and pair each match with its value.
///
/// Pages, tables, rows and cells are visited in document order and the
/// result keeps that order. A cell matches a label when its text starts with
/// the label. The value is the next non-empty cell of the row, or, when the
/// label cell is the last one, whatever follows the label inside the cell
/// ("Latitude: 6.9270N"). Matches with an empty value are dropped.
pub fn extract_fields(pages: &[PageTables]) -> Vec<ExtractedField> {
    let mut fields = Vec::new();

    for page in pages {
        for table in &page.tables {
            for row in &table.rows {
                let cells = compact_row(row);
                for (i, cell) in cells.iter().enumerate() {
                    for label in TargetLabel::ALL {
                        if !cell.starts_with(label.as_str()) {
                            continue;
                        }

                        let value = match cells.get(i + 1) {
                            Some(next) => next.clone(),
                            None => inline_value(cell, label),
                        };
                        if value.is_empty() {
                            continue;
                        }

                        let key = label.canonical_key();
                        let normalized = normalize_value(&value, Some(key));
                        log::debug!(
                            "page {}: '{}' -> {} = {:?}",
                            page.page_number,
                            label,
                            key,
                            normalized
                        );
                        fields.push(ExtractedField {
                            label,
                            field: key.to_string(),
                            value: normalized,
                        });
                    }
                }
            }
        }
    }

    fields
}

/// Collapse whitespace runs inside each cell and drop cells left empty.
fn compact_row(row: &Row) -> Vec<String> {
    row.iter()
        .filter_map(|cell| cell.as_deref())
        .map(|cell| cell.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Value written in the same cell as its label.
fn inline_value(cell: &str, label: TargetLabel) -> String {
    cell.strip_prefix(label.as_str())
        .unwrap_or(cell)
        .trim_matches([':', ' '])
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::Table;
    use crate::model::keys;

    fn row(cells: &[Option<&str>]) -> Row {
        cells.iter().map(|c| c.map(str::to_string)).collect()
    }

    fn page(rows: Vec<Row>) -> PageTables {
        PageTables {
            page_number: 1,
            tables: vec![Table { rows }],
        }
    }

    #[test]
    fn test_value_from_next_cell() {
        let pages = vec![page(vec![row(&[Some("Channel Bandwidth"), Some("40 MHz")])])];
        let fields = extract_fields(&pages);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, keys::BANDWIDTH);
        assert_eq!(fields[0].value, "2");
        assert_eq!(fields[0].label, TargetLabel::ChannelBandwidth);
    }

    #[test]
    fn test_value_inline_with_label() {
        let pages = vec![page(vec![row(&[Some("Latitude: 6.9270N")])])];
        let fields = extract_fields(&pages);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, keys::LATITUDE);
        assert_eq!(fields[0].value, "6.927");
    }

    #[test]
    fn test_empty_cells_skipped_before_pairing() {
        let pages = vec![page(vec![row(&[
            None,
            Some("Antenna  Height"),
            Some(""),
            None,
            Some("30   meters AGL"),
        ])])];
        let fields = extract_fields(&pages);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, keys::HEIGHT);
        assert_eq!(fields[0].value, "30");
    }

    #[test]
    fn test_label_without_value_dropped() {
        let pages = vec![page(vec![row(&[Some("System Name")]), row(&[Some("Frequency:")])])];
        assert!(extract_fields(&pages).is_empty());
    }

    #[test]
    fn test_prefix_match_only() {
        let pages = vec![page(vec![row(&[Some("Center Frequency"), Some("5180")])])];
        assert!(extract_fields(&pages).is_empty());
    }

    #[test]
    fn test_document_order_across_pages_and_tables() {
        let pages = vec![
            PageTables {
                page_number: 1,
                tables: vec![
                    Table {
                        rows: vec![row(&[Some("Master"), Some("Colombo-AP")])],
                    },
                    Table {
                        rows: vec![row(&[Some("Slave"), Some("Kandy-SM")])],
                    },
                ],
            },
            PageTables {
                page_number: 2,
                tables: vec![Table {
                    rows: vec![row(&[Some("Frequency"), Some("5180 MHz")])],
                }],
            },
        ];
        let fields = extract_fields(&pages);
        let values: Vec<_> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["Colombo-AP", "Kandy-SM", "5180"]);
        assert_eq!(fields[0].field, keys::DEVICE_NAME);
        assert_eq!(fields[1].field, keys::DEVICE_NAME);
    }

    #[test]
    fn test_two_labels_in_one_row() {
        let pages = vec![page(vec![row(&[
            Some("Latitude"),
            Some("6.9270N"),
            Some("Longitude"),
            Some("79.8612E"),
        ])])];
        let fields = extract_fields(&pages);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].value, "6.927");
        assert_eq!(fields[1].field, keys::LONGITUDE);
        assert_eq!(fields[1].value, "79.8612");
    }

    #[test]
    fn test_value_cell_starting_with_label_also_matches() {
        // The value cell itself starts with "Master", so it is matched again
        // with its own remainder as value.
        let pages = vec![page(vec![row(&[Some("Master"), Some("Master Site")])])];
        let fields = extract_fields(&pages);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].value, "Master Site");
        assert_eq!(fields[1].value, "Site");
    }

    #[test]
    fn test_compact_row() {
        let r = row(&[Some("  AP   SSID "), None, Some(""), Some("   ")]);
        assert_eq!(compact_row(&r), vec!["AP SSID".to_string()]);
    }
}
