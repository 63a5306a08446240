// src/export/csv.rs
//! CSV serializer — RFC-4180 quoting via the `csv` crate

use std::io::Write;

use csv::WriterBuilder;

use crate::consts::CSV_HEADER;
use crate::error::ExportError;
use crate::record::ExportRecord;

/// Write the fixed header row plus one data row per record.
///
/// A field containing the delimiter, a quote, or a line break gets quoted
/// and embedded quotes are doubled. Delimiter is `,` and the row terminator
/// is `\n`, fixed regardless of the runtime's regional settings.
pub(super) fn write_csv<W: Write>(
    records: &[ExportRecord],
    sink: &mut W,
) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new().from_writer(sink);

    writer.write_record(CSV_HEADER).map_err(into_write_error)?;
    for record in records {
        writer
            .write_record([
                record.title.as_str(),
                record.username.as_str(),
                record.password.as_str(),
                record.url.as_str(),
                record.notes.as_str(),
            ])
            .map_err(into_write_error)?;
    }
    writer.flush().map_err(ExportError::WriteFailed)?;

    Ok(())
}

// Rows have a fixed width, so the only csv-level failures left are I/O
fn into_write_error(err: csv::Error) -> ExportError {
    let msg = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => ExportError::WriteFailed(io),
        _ => ExportError::WriteFailed(std::io::Error::other(msg)),
    }
}
