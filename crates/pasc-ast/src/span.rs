//! Source location tracking

use serde::{Deserialize, Serialize};

/// Where a node came from in the source text.
///
/// Both coordinates are absent for nodes synthesized by the front-end
/// rather than read from source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based source line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 1-based column within the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
}

impl Position {
    pub fn new(line: u32, row: u32) -> Self {
        Self {
            line: Some(line),
            row: Some(row),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.line.is_some() || self.row.is_some()
    }
}
