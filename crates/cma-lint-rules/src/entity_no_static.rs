//! Rule forbidding static members on entities.
//!
//! Static fields and methods turn an entity into a namespace for shared
//! state or factories. Constants and factories belong in the data layer or
//! in a dedicated domain service.

use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

use crate::entity_members::{entity_classes, field_owner, method_owner, Owner};

/// Rule code for `entity_no_static`.
pub const CODE: &str = "CMA003";

/// Rule name for `entity_no_static`.
pub const NAME: &str = "entity_no_static";

/// Forbids static fields and methods on entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNoStatic;

impl EntityNoStatic {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EntityNoStatic {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Entities must not declare static members"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Move static members to a separate class outside the entity")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for class in entity_classes(ctx, unit) {
            for field in class.fields() {
                if field_owner(field) == Owner::Static {
                    let names: Vec<&str> =
                        field.variables.iter().map(|v| v.name.as_str()).collect();
                    diagnostics.push(self.diagnostic(
                        ctx,
                        field.span,
                        format!(
                            "Entity `{}` must not declare static field `{}`",
                            class.name,
                            names.join(", ")
                        ),
                    ));
                }
            }
            for method in class.methods() {
                if method_owner(method) == Owner::Static {
                    diagnostics.push(self.diagnostic(
                        ctx,
                        method.name_span,
                        format!(
                            "Entity `{}` must not declare static member `{}`",
                            class.name, method.name
                        ),
                    ));
                }
            }
        }
        diagnostics
    }
}
