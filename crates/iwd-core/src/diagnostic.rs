//! # Diagnostics and Check Outcomes
//!
//! A [`Diagnostic`] is one human-readable finding. A [`CheckOutcome`] is the
//! complete result of one check: whether it passed, and the findings it
//! produced in the order they were made.
//!
//! Warnings never affect the pass flag. A failed outcome always carries at
//! least one error diagnostic; a passed outcome carries none.

use std::fmt;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational message, e.g. a pass confirmation.
    Info,
    /// Non-fatal finding that should be addressed.
    Warning,
    /// Finding that fails the check.
    Error,
}

impl Severity {
    /// Console prefix used when the diagnostic is rendered.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "✅",
            Self::Warning => "⚠️ ",
            Self::Error => "❌",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message, without any console prefix.
    pub message: String,
    /// Whether this is a list item under the preceding diagnostic.
    ///
    /// Item diagnostics are rendered as indented bullets instead of
    /// carrying their own icon.
    pub item: bool,
}

impl Diagnostic {
    /// Create an info diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create an error list item, rendered beneath a preceding error.
    pub fn error_item(message: impl Into<String>) -> Self {
        Self {
            item: true,
            ..Self::error(message)
        }
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            item: false,
        }
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Check if this is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item {
            write!(f, "   - {}", self.message)
        } else {
            write!(f, "{} {}", self.severity.icon(), self.message)
        }
    }
}

/// The result of running one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    passed: bool,
    diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    /// A passing outcome with the given diagnostics.
    ///
    /// Error diagnostics are not permitted in a passing outcome; any that
    /// are supplied flip the outcome to failed.
    pub fn pass(diagnostics: Vec<Diagnostic>) -> Self {
        let passed = !diagnostics.iter().any(Diagnostic::is_error);
        Self {
            passed,
            diagnostics,
        }
    }

    /// A failing outcome carrying a single error.
    pub fn fail(error: Diagnostic) -> Self {
        Self::fail_with(vec![error])
    }

    /// A failing outcome with the given diagnostics.
    pub fn fail_with(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            passed: false,
            diagnostics,
        }
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// All diagnostics in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error diagnostics only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Warning diagnostics only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// The first error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors().next().map(|d| d.message.as_str())
    }
}
