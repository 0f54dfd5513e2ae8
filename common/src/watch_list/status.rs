//! Transient status banner shown above the watch list.

use crate::error::RegisterError;

/// How long a status message stays visible.
pub const STATUS_CLEAR_DELAY_MS: u32 = 3_500;

/// Wait before reloading after a successful re-parse, giving the parsing
/// backend time to write its metadata row. Freshness is best effort.
pub const REPARSE_REFRESH_DELAY_MS: u32 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn from_error(prefix: &str, err: &RegisterError) -> Self {
        Self::error(format!("{prefix}: {err}"))
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}
