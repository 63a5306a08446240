// src/export/text.rs
//! Plain-text block serializer

use std::io::Write;

use crate::consts::TEXT_SEPARATOR;
use crate::error::ExportError;
use crate::record::ExportRecord;

/// Write one labeled block per record: five `Label: value` lines, a
/// separator line of dashes, then a blank line.
///
/// Values go out verbatim. An embedded newline in a field will visually
/// break its block; that is the format's contract, not something to escape.
pub(super) fn write_text<W: Write>(
    records: &[ExportRecord],
    sink: &mut W,
) -> Result<(), ExportError> {
    for record in records {
        write!(
            sink,
            "Title: {}\nUsername: {}\nPassword: {}\nUrl: {}\nNotes: {}\n{TEXT_SEPARATOR}\n\n",
            record.title, record.username, record.password, record.url, record.notes
        )
        .map_err(ExportError::WriteFailed)?;
    }

    Ok(())
}
