//! Advisory messages produced while generating documentation.
//!
//! Diagnostics never change what gets generated. Each one is logged
//! through `tracing` when raised and also collected into the
//! [`GenerationReport`](crate::generator::GenerationReport).

use std::fmt;

use tracing::{info, warn};

/// Identifier of a diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticId {
    /// Options and paths selected for a pass.
    PassInfo,
    /// An output file could not be written.
    WriteFailed,
    /// A multi-file layout was given a file path.
    NotADirectory,
    /// A `Documentation` attribute instance could not be decoded.
    InvalidAnnotation,
}

impl DiagnosticId {
    /// Stable code, e.g. `CDG001`.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticId::PassInfo => "CDG000",
            DiagnosticId::WriteFailed => "CDG001",
            DiagnosticId::NotADirectory => "CDG002",
            DiagnosticId::InvalidAnnotation => "CDG003",
        }
    }

    /// Severity attached to this kind.
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticId::PassInfo => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational.
    Info,
    /// Something was skipped or worked around.
    Warning,
}

/// One advisory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Kind of diagnostic.
    pub id: DiagnosticId,
    /// Human readable text.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic and logs it at its severity.
    pub fn emit(id: DiagnosticId, message: impl Into<String>) -> Self {
        let message = message.into();
        match id.severity() {
            Severity::Info => info!(code = id.code(), "{message}"),
            Severity::Warning => warn!(code = id.code(), "{message}"),
        }
        Self { id, message }
    }

    /// Severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.id.severity()
    }

    /// Whether this is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity() {
            Severity::Info => "info",
            Severity::Warning => "warning",
        };
        write!(f, "{level}[{}]: {}", self.id, self.message)
    }
}
