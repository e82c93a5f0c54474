//! Rule forbidding computed getters on entities.
//!
//! Only `=> field` and abstract getters are fine. Any other body
//! (`get fullName => '$first $last'`, `get props => [id]`) is behaviour,
//! which belongs in a use case.

use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

use crate::entity_members::{entity_classes, method_owner, Owner};

/// Rule code for `entity_no_getters`.
pub const CODE: &str = "CMA005";

/// Rule name for `entity_no_getters`.
pub const NAME: &str = "entity_no_getters";

/// Forbids computed getters on entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNoGetters;

impl EntityNoGetters {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EntityNoGetters {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Entities must not contain computed getters"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Store the value in a final field or compute it in a use case")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for class in entity_classes(ctx, unit) {
            for method in class.methods() {
                if method_owner(method) == Owner::ComputedGetter {
                    diagnostics.push(self.diagnostic(
                        ctx,
                        method.name_span,
                        format!(
                            "Entity `{}` must not define computed getter `{}`",
                            class.name, method.name
                        ),
                    ));
                }
            }
        }
        diagnostics
    }
}
