// src/lib.rs
//! selection-export — serialize a selection of credential entries to TXT or CSV
//!
//! Features:
//! - Fixed five-field record shape (Title, Username, Password, Url, Notes)
//! - Plain-text block output or RFC-4180 CSV
//! - Typed errors, single attempt per call, no retries

pub mod consts;
pub mod enums;
pub mod error;
pub mod export;
pub mod record;

// Re-export everything users need at the crate root
pub use enums::ExportFormat;
pub use error::{ExportError, Result};
pub use export::{export, export_to_path};
pub use record::{ExportRecord, FieldSource};
