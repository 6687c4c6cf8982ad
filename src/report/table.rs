use crate::classifier::classifier::Row;

use super::HEADERS;

/// Renders rows as a right-aligned table with a 0-based index column.
pub fn render_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return format!("Empty table\nColumns: [{}]", HEADERS.join(", "));
    }

    let index_width = (rows.len() - 1).to_string().len();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(&" ".repeat(index_width), HEADERS, &widths));

    for (index, row) in rows.iter().enumerate() {
        let index = format!("{:<index_width$}", index);
        lines.push(render_line(&index, row.cells(), &widths));
    }

    lines.join("\n")
}

fn render_line(index: &str, cells: [&str; 3], widths: &[usize; 3]) -> String {
    let mut line = String::from(index);

    for (cell, width) in cells.iter().zip(widths) {
        line.push_str("  ");
        line.push_str(&format!("{:>width$}", cell, width = *width));
    }

    line
}
