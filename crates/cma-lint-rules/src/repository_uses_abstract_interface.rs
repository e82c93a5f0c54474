//! Rule requiring repository contracts to be `abstract interface` classes.
//!
//! Dart 3 class modifiers let a contract forbid `extends`. A plain
//! `abstract class AuthRepository` can still be subclassed and inherit
//! behaviour; `abstract interface class` can only be implemented.

use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Rule code for `repository_uses_abstract_interface`.
pub const CODE: &str = "CMA009";

/// Rule name for `repository_uses_abstract_interface`.
pub const NAME: &str = "repository_uses_abstract_interface";

/// Requires `abstract interface class` for repository contracts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryUsesAbstractInterface;

impl RepositoryUsesAbstractInterface {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RepositoryUsesAbstractInterface {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Repository interfaces should be declared as abstract interface classes"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Declare the repository as `abstract interface class`")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let suffix = ctx.config.naming.repository_suffix.as_str();
        if suffix.is_empty() || !ctx.config.is_repository_interface_path(ctx.path) {
            return Vec::new();
        }

        unit.classes()
            .filter(|class| class.modifiers.is_abstract && !class.modifiers.is_interface)
            .filter(|class| class.name.ends_with(suffix))
            .map(|class| {
                self.diagnostic(
                    ctx,
                    class.name_span,
                    format!(
                        "Repository `{}` should be declared as `abstract interface class`",
                        class.name
                    ),
                )
            })
            .collect()
    }
}
