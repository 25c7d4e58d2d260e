//! User-facing status notices.
//!
//! Every problem a menu reports to the person at the terminal is a notice,
//! never an error: an unknown command, a bad selection or a redundant toggle
//! is printed and the loop carries on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of notice, which decides the leading glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A state change went through
    Success,
    /// Nothing changed, but nothing was wrong either
    Warning,
    /// The request could not be honored
    Error,
    /// The escape command was not recognized
    Unrecognized,
}

impl NoticeKind {
    /// Glyph printed in front of the message.
    pub fn glyph(self) -> &'static str {
        match self {
            NoticeKind::Success => "✅",
            NoticeKind::Warning => "⚠️",
            NoticeKind::Error => "❗",
            NoticeKind::Unrecognized => "❓",
        }
    }
}

/// A single status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Create a notice of the given kind.
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn unrecognized(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Unrecognized, message)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.glyph(), self.message)
    }
}
