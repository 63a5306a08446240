// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The caller handed us zero records. Nothing was written.
    #[error("no entries selected for export")]
    EmptySelection,

    /// The destination could not be opened or created.
    #[error("export destination unavailable: {0}")]
    SinkUnavailable(#[source] std::io::Error),

    /// An I/O error occurred mid-stream. Partial output may remain on disk.
    #[error("write to export destination failed: {0}")]
    WriteFailed(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
