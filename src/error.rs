//! The failure signal carried by the throw-to-fail channel.
//!
//! Assertion terminals, test bodies, and hooks all report trouble the same
//! way: by returning `Err(Failure)`. The fixture executor is the only thing
//! that catches a `Failure`; it converts the value into a terminal outcome
//! state. Each failure carries a kind alongside its message so reporters can
//! tell a failed assertion apart from code under test blowing up.

use std::fmt;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Result alias used by test bodies, hooks, and assertion terminals.
pub type Check = Result<(), Failure>;

/// Classifies what produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// A fluent assertion terminal observed the unexpected boolean.
    Assertion,
    /// The test body or a hook returned an error, or panicked.
    Defect,
    /// Contradictory fixture metadata, e.g. a skipped test that still
    /// declares a pass/fail intent.
    Config,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Assertion => "assertion",
            FailureKind::Defect => "defect",
            FailureKind::Config => "config",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single failure signal: kind plus message.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum Failure {
    #[error("assertion failed: {message}")]
    #[diagnostic(code(attest::assertion))]
    Assertion { message: String },

    #[error("{message}")]
    #[diagnostic(code(attest::defect))]
    Defect { message: String },

    #[error("configuration fault: {message}")]
    #[diagnostic(code(attest::config))]
    Config { message: String },
}

impl Failure {
    pub fn assertion(message: impl Into<String>) -> Self {
        Failure::Assertion {
            message: message.into(),
        }
    }

    pub fn defect(message: impl Into<String>) -> Self {
        Failure::Defect {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Failure::Config {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::Assertion { .. } => FailureKind::Assertion,
            Failure::Defect { .. } => FailureKind::Defect,
            Failure::Config { .. } => FailureKind::Config,
        }
    }

    /// The bare message, without the kind prefix `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            Failure::Assertion { message }
            | Failure::Defect { message }
            | Failure::Config { message } => message,
        }
    }
}
