// src/export/mod.rs
//! Export writers for selection-export
//!
//! Two fixed formats: plain-text blocks and RFC-4180 CSV.
//! Both write plaintext passwords — warn users heavily.

mod csv;
mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::enums::ExportFormat;
use crate::error::ExportError;
use crate::record::ExportRecord;

/// Serialize `records` into `sink` using `format`.
///
/// Records go out in input order. The sink is flushed before this returns;
/// closing it is the caller's business. Returns the number of bytes that
/// reached the sink.
///
/// Fails with [`ExportError::EmptySelection`] before touching the sink if
/// `records` is empty, and with [`ExportError::WriteFailed`] on any I/O
/// error mid-stream. Partial output is not rolled back.
pub fn export<W: Write>(
    records: &[ExportRecord],
    format: ExportFormat,
    sink: W,
) -> Result<u64, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let mut sink = CountingWriter::new(sink);
    match format {
        ExportFormat::Text => text::write_text(records, &mut sink)?,
        ExportFormat::Csv => csv::write_csv(records, &mut sink)?,
    }
    sink.flush().map_err(ExportError::WriteFailed)?;

    Ok(sink.bytes_written())
}

/// Export straight to a file path, creating or truncating the file.
///
/// The handle is buffered, flushed, and dropped on every exit path. A
/// failed open yields [`ExportError::SinkUnavailable`]; a mid-stream
/// failure leaves whatever was already written on disk and reports
/// [`ExportError::WriteFailed`].
pub fn export_to_path<P: AsRef<Path>>(
    records: &[ExportRecord],
    format: ExportFormat,
    path: P,
) -> Result<u64, ExportError> {
    // Reject before create so an empty selection never truncates a file
    if records.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    let path = path.as_ref();
    let file = File::create(path).map_err(ExportError::SinkUnavailable)?;
    let bytes = export(records, format, BufWriter::new(file))?;

    log::info!(
        "exported {} record(s), {} bytes -> {}",
        records.len(),
        bytes,
        path.display()
    );

    Ok(bytes)
}

/// Wraps a sink and counts the bytes that actually reached it
struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
