//! Rule forbidding behaviour on entities.
//!
//! # Rationale
//!
//! In Clean Architecture an entity is data plus construction. Business
//! operations live in use cases; mutation helpers live in models.
//!
//! # Allowed Members
//!
//! - operator overrides (`==`)
//! - `toString`
//! - getters (computed ones are reported by `entity_no_getters`)
//! - members reported by a narrower rule: `copyWith`, serialization
//!   methods, static members

use cma_lint_core::syntax::MethodKind;
use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

use crate::entity_members::{entity_classes, method_owner, Owner};

/// Rule code for `entity_no_methods`.
pub const CODE: &str = "CMA001";

/// Rule name for `entity_no_methods`.
pub const NAME: &str = "entity_no_methods";

/// Forbids methods on entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNoMethods;

impl EntityNoMethods {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EntityNoMethods {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Entities must not contain methods"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Move the logic to a use case or to the data model")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for class in entity_classes(ctx, unit) {
            for method in class.methods() {
                if method_owner(method) != Owner::Method {
                    continue;
                }
                let what = if method.method_kind == MethodKind::Setter {
                    "setter"
                } else {
                    "method"
                };
                diagnostics.push(self.diagnostic(
                    ctx,
                    method.name_span,
                    format!(
                        "Entity `{}` must not define {what} `{}`",
                        class.name, method.name
                    ),
                ));
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run;
    use cma_lint_core::syntax::build::*;
    use cma_lint_core::syntax::ClassDecl;

    const ENTITY_PATH: &str = "lib/features/auth/domain/entities/user.dart";

    fn check_code(class: ClassDecl) -> Vec<Diagnostic> {
        run(&EntityNoMethods::new(), ENTITY_PATH, &unit().class(class).build())
    }

    #[test]
    fn test_detects_method() {
        let diagnostics = check_code(
            class("User")
                .method(method("validate").at(6).returns(ty("bool")).build())
                .build(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, NAME);
        assert!(diagnostics[0].message.contains("validate"));
    }

    #[test]
    fn test_detects_setter() {
        let diagnostics = check_code(
            class("User")
                .method(method("name").kind(MethodKind::Setter).build())
                .build(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("setter"));
    }

    #[test]
    fn test_allows_operator_and_to_string() {
        let diagnostics = check_code(
            class("User")
                .method(operator("==").param(param("other", ty("Object"))).build())
                .method(method("toString").returns(ty("String")).build())
                .method(getter("hashCode").arrow(ident("_hash")).build())
                .build(),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_leaves_narrower_members_alone() {
        let diagnostics = check_code(
            class("User")
                .method(method("copyWith").build())
                .method(method("toJson").build())
                .method(method("create").static_().build())
                .build(),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_use_cases() {
        let diagnostics = run(
            &EntityNoMethods::new(),
            "lib/features/auth/domain/usecases/login.dart",
            &unit()
                .class(class("Login").method(method("call").build()).build())
                .build(),
        );
        assert!(diagnostics.is_empty());
    }
}
