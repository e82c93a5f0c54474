//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::{CompilationUnit, Span};
use crate::types::{Diagnostic, Location, Severity};

/// A per-file architecture rule.
///
/// Rules are stateless: `check` reads the unit and the context and returns
/// diagnostics. A rule must not panic on tree shapes it does not recognise;
/// it simply reports nothing for them.
///
/// # Example
///
/// ```
/// use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule};
///
/// pub struct NoPartDirectives;
///
/// impl Rule for NoPartDirectives {
///     fn name(&self) -> &'static str { "no_part_directives" }
///     fn code(&self) -> &'static str { "X001" }
///
///     fn check(&self, _ctx: &FileContext, _unit: &CompilationUnit) -> Vec<Diagnostic> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the snake_case id of this rule (e.g., "entity_no_copywith").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CMA002").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the generic fix hint attached to this rule's diagnostics.
    fn correction(&self) -> Option<&'static str> {
        None
    }

    /// Checks a single unit and returns any diagnostics found.
    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic>;

    /// Builds a diagnostic for this rule at `span` with the default severity
    /// and correction.
    fn diagnostic(&self, ctx: &FileContext, span: Span, message: String) -> Diagnostic
    where
        Self: Sized,
    {
        let d = Diagnostic::new(
            self.code(),
            self.name(),
            self.default_severity(),
            Location::from_span(ctx.path.to_path_buf(), span),
            message,
        );
        match self.correction() {
            Some(correction) => d.with_correction(correction),
            None => d,
        }
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
