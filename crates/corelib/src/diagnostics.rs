//! Error-kind -> static message catalog backing the diagnostics channel.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of diagnostic kinds raised by the collaborator modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    OutOfMemory,
    InsufficientPrecision,
    MissingFile,
    ReadFailure,
    InvalidValue,
    BufferOverflow,
    UnsupportedField,
    UnsupportedCurve,
    MissingConfiguration,
}

impl ErrorKind {
    /// Every declared kind, in catalog order.
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::OutOfMemory,
        ErrorKind::InsufficientPrecision,
        ErrorKind::MissingFile,
        ErrorKind::ReadFailure,
        ErrorKind::InvalidValue,
        ErrorKind::BufferOverflow,
        ErrorKind::UnsupportedField,
        ErrorKind::UnsupportedCurve,
        ErrorKind::MissingConfiguration,
    ];

    /// Fixed human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::OutOfMemory => "not enough memory available",
            ErrorKind::InsufficientPrecision => "insufficient precision for requested operation",
            ErrorKind::MissingFile => "file not found",
            ErrorKind::ReadFailure => "could not read data from source",
            ErrorKind::InvalidValue => "invalid value passed as input",
            ErrorKind::BufferOverflow => "insufficient buffer capacity",
            ErrorKind::UnsupportedField => "field arithmetic configuration is not supported",
            ErrorKind::UnsupportedCurve => "curve arithmetic configuration is not supported",
            ErrorKind::MissingConfiguration => "no field or curve has been configured",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fixed mapping from error kind to message, built once during
/// initialization and owned by the context until teardown.
///
/// Construction is all-or-nothing: a table missing any declared kind is
/// never observable.
#[derive(Debug, Clone)]
pub struct DiagnosticsTable {
    messages: BTreeMap<ErrorKind, &'static str>,
}

impl DiagnosticsTable {
    /// Populate the full catalog.
    pub fn build() -> Result<Self, ErrorKind> {
        let mut messages = BTreeMap::new();
        for kind in ErrorKind::ALL {
            messages.insert(kind, kind.message());
        }
        let table = Self { messages };
        if !table.is_complete() {
            return Err(ErrorKind::OutOfMemory);
        }
        Ok(table)
    }

    /// Message for `kind`, if the catalog holds one.
    pub fn message(&self, kind: ErrorKind) -> Option<&'static str> {
        self.messages.get(&kind).copied()
    }

    /// True when every declared kind maps to a non-empty message.
    pub fn is_complete(&self) -> bool {
        ErrorKind::ALL
            .iter()
            .all(|kind| self.messages.get(kind).is_some_and(|msg| !msg.is_empty()))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
