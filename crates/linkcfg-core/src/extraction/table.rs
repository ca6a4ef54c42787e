use crate::extraction::{Row, Table};

/// Reconstruct tables from pdftotext -layout page text.
///
/// pdftotext -layout keeps column alignment with runs of spaces, so a table
/// is taken to be a block of consecutive non-blank lines and each line is a
/// row whose cells are separated by gaps of two or more spaces.
pub fn tables_from_layout(lines: &[&str]) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Vec<Row> = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                tables.push(Table {
                    rows: std::mem::take(&mut current),
                });
            }
            continue;
        }

        let row: Row = split_by_whitespace_gaps(line)
            .into_iter()
            .map(|cell| Some(cell.to_string()))
            .collect();
        current.push(row);
    }

    if !current.is_empty() {
        tables.push(Table { rows: current });
    }

    tables
}

/// Split a line by gaps of 2+ whitespace characters.
pub fn split_by_whitespace_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    let mut last_end = 0;
    let mut space_count = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some(s) = start.take() {
                    segments.push(&line[s..last_end]);
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
            last_end = i + c.len_utf8();
        }
    }

    if let Some(s) = start {
        segments.push(&line[s..last_end]);
    }

    segments
}
