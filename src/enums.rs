// src/enums.rs
//! Public enum types used throughout the crate

use serde::{Deserialize, Serialize};

/// Supported export formats
///
/// Closed two-way choice: each variant selects one serialization strategy
/// in the export writer and carries no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
}

impl ExportFormat {
    /// Conventional file extension for this format, without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }
}
