//! Core types for diagnostics and results.

use miette::SourceSpan;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::syntax::Span;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is switched off; diagnostics are dropped.
    Ignore,
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Accepted configuration tokens.
    pub const TOKENS: [&'static str; 4] = ["error", "warning", "info", "ignore"];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Error returned when a severity token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}' (expected one of: error, warning, info, ignore)")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "ignore" => Ok(Self::Ignore),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as supplied by the host.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a location from a syntax node span.
    #[must_use]
    pub fn from_span(file: PathBuf, span: Span) -> Self {
        Self {
            file,
            line: span.line,
            column: span.column,
            offset: span.offset,
            length: span.length,
        }
    }
}

/// A single reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g., "CMA002").
    pub code: String,
    /// Rule id (e.g., "entity_no_copywith").
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Primary location.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// How to fix it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            correction: None,
        }
    }

    /// Adds a correction hint.
    #[must_use]
    pub fn with_correction(mut self, correction: impl Into<String>) -> Self {
        self.correction = Some(correction.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.rule,
            self.message
        )
    }
}

/// A [`Diagnostic`] adapted for `miette` rendering.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct RenderedDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Diagnostic> for RenderedDiagnostic {
    fn from(d: &Diagnostic) -> Self {
        Self {
            message: format!("[{}] {}", d.rule, d.message),
            help: d.correction.clone(),
            span: SourceSpan::from((d.location.offset, d.location.length)),
            label_message: d.rule.clone(),
        }
    }
}

/// Result of analyzing a set of units.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of units checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_diagnostics_at(Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Returns diagnostics reported by one rule.
    #[must_use]
    pub fn by_rule(&self, rule: &str) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.rule == rule).collect()
    }

    /// Counts diagnostics by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Sorts diagnostics by file, line, column, then rule code.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
                .then(a.code.cmp(&b.code))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(severity: Severity, line: usize) -> Diagnostic {
        Diagnostic::new(
            "CMA002",
            "entity_no_copywith",
            severity,
            Location::from_span(
                PathBuf::from("lib/domain/entities/user.dart"),
                Span::at(line, 3),
            ),
            "Entities must not define copyWith",
        )
    }

    #[test]
    fn severity_parses_tokens_case_insensitively() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" info ".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("ignore".parse::<Severity>(), Ok(Severity::Ignore));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_orders_ignore_lowest() {
        assert!(Severity::Ignore < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn display_is_compact_single_line() {
        let display = make_diagnostic(Severity::Warning, 7).to_string();
        assert_eq!(
            display,
            "lib/domain/entities/user.dart:7:3: warning [entity_no_copywith] Entities must not define copyWith"
        );
    }

    #[test]
    fn counts_by_severity() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic(Severity::Error, 1));
        result.diagnostics.push(make_diagnostic(Severity::Warning, 2));
        result.diagnostics.push(make_diagnostic(Severity::Warning, 3));
        assert_eq!(result.count_by_severity(), (1, 2, 0));
        assert!(result.has_errors());
    }

    #[test]
    fn warnings_only_is_not_an_error() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic(Severity::Warning, 1));
        assert!(!result.has_errors());
        assert!(result.has_diagnostics_at(Severity::Warning));
    }

    #[test]
    fn sort_orders_by_line() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic(Severity::Error, 9));
        result.diagnostics.push(make_diagnostic(Severity::Error, 2));
        result.sort();
        assert_eq!(result.diagnostics[0].location.line, 2);
    }

    #[test]
    fn rendered_diagnostic_carries_help() {
        let d = make_diagnostic(Severity::Error, 1).with_correction("fix it");
        let rendered = RenderedDiagnostic::from(&d);
        assert_eq!(rendered.help.as_deref(), Some("fix it"));
        assert!(rendered.to_string().contains("entity_no_copywith"));
    }
}
