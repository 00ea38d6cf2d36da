//! Runtime context owned by a `Core` handle: lifecycle status, the
//! diagnostics table, the last raised error, and the trace-depth counter.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticsTable, ErrorKind};

/// Outcome of the last lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Shared runtime state read and written by every collaborator module.
///
/// One context exists per `Core` handle; there is no process-wide global.
#[derive(Debug)]
pub struct Context {
    status: Status,
    diagnostics: Option<DiagnosticsTable>,
    last_error: Option<ErrorKind>,
    trace_depth: i32,
    trace_enabled: bool,
}

impl Context {
    pub fn new() -> Self {
        Self {
            status: Status::Ok,
            diagnostics: None,
            last_error: None,
            trace_depth: 0,
            trace_enabled: false,
        }
    }

    /// Zero every field back to its default. Releases the diagnostics
    /// table if one is still installed.
    pub fn reset(&mut self) {
        self.status = Status::Ok;
        self.diagnostics = None;
        self.last_error = None;
        self.trace_depth = 0;
        self.trace_enabled = false;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn install_diagnostics(&mut self, table: DiagnosticsTable) {
        self.diagnostics = Some(table);
    }

    /// Hand the table back to the caller, leaving none installed. The
    /// `Option::take` makes a double release unrepresentable.
    pub fn release_diagnostics(&mut self) -> Option<DiagnosticsTable> {
        self.diagnostics.take()
    }

    pub fn diagnostics(&self) -> Option<&DiagnosticsTable> {
        self.diagnostics.as_ref()
    }

    /// Record `kind` as the most recent error and return its message.
    ///
    /// A no-op returning `None` when diagnostics are not installed.
    pub fn raise(&mut self, kind: ErrorKind) -> Option<&'static str> {
        let message = self.diagnostics.as_ref()?.message(kind)?;
        self.last_error = Some(kind);
        Some(message)
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn clear_last_error(&mut self) {
        self.last_error = None;
    }

    pub fn message_for(&self, kind: ErrorKind) -> Option<&'static str> {
        self.diagnostics.as_ref()?.message(kind)
    }

    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
        self.trace_depth = 0;
    }

    pub fn trace_enter(&mut self) {
        if self.trace_enabled {
            self.trace_depth += 1;
        }
    }

    pub fn trace_exit(&mut self) {
        if self.trace_enabled {
            self.trace_depth -= 1;
        }
    }

    pub fn trace_depth(&self) -> i32 {
        self.trace_depth
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
