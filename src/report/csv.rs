use std::{borrow::Cow, io::{self, Write}};

use crate::classifier::classifier::Row;

use super::HEADERS;

/// Writes a header line and one line per row.
pub fn write_csv<W: Write>(rows: &[Row], mut writer: W) -> io::Result<()> {
    write_record(&mut writer, HEADERS)?;

    for row in rows {
        write_record(&mut writer, row.cells())?;
    }

    writer.flush()
}

fn write_record<W: Write>(writer: &mut W, cells: [&str; 3]) -> io::Result<()> {
    let record: Vec<Cow<str>> = cells.iter().map(|cell| escape_field(cell)).collect();

    writeln!(writer, "{}", record.join(","))
}

/// Quotes a field when it holds a separator, a quote or a line break.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
