//! Rule forbidding serialization members on entities.
//!
//! # Rationale
//!
//! Wire and storage formats are a data-layer concern. An entity that knows
//! how to read itself from JSON couples the domain to a transport.
//!
//! # Detected Patterns
//!
//! Methods and named constructors called `fromJson`, `toJson`, `fromMap`,
//! `toMap`, `fromDocument` or `toDocument`.

use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

use crate::entity_members::{constructor_owner, entity_classes, method_owner, Owner};

/// Rule code for `entity_no_serialization`.
pub const CODE: &str = "CMA004";

/// Rule name for `entity_no_serialization`.
pub const NAME: &str = "entity_no_serialization";

/// Forbids serialization methods and constructors on entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNoSerialization;

impl EntityNoSerialization {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EntityNoSerialization {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Entities must not contain serialization logic"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Move serialization to the data model that extends this entity")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for class in entity_classes(ctx, unit) {
            for ctor in class.constructors() {
                if constructor_owner(ctor) == Owner::Serialization {
                    let name = ctor.name.as_deref().unwrap_or_default();
                    diagnostics.push(self.diagnostic(
                        ctx,
                        ctor.span,
                        format!(
                            "Entity `{}` must not define serialization constructor `{}.{name}`",
                            class.name, class.name
                        ),
                    ));
                }
            }
            for method in class.methods() {
                if method_owner(method) == Owner::Serialization {
                    diagnostics.push(self.diagnostic(
                        ctx,
                        method.name_span,
                        format!(
                            "Entity `{}` must not define serialization method `{}`",
                            class.name, method.name
                        ),
                    ));
                }
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

    fn check_code(path: &str, class: ClassDecl) -> Vec<Diagnostic> {
        run(&EntityNoSerialization::new(), path, &unit().class(class).build())
    }

    const ENTITY_PATH: &str = "lib/features/auth/domain/entities/user.dart";

    #[test]
    fn test_detects_to_json() {
        let diagnostics = check_code(
            ENTITY_PATH,
            class("User")
                .method(
                    method("toJson")
                        .returns(generic("Map", [ty("String"), ty("dynamic")]))
                        .build(),
                )
                .build(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("toJson"));
    }

    #[test]
    fn test_detects_factory_from_json() {
        let diagnostics = check_code(
            ENTITY_PATH,
            class("User")
                .constructor(factory_constructor("fromJson"))
                .build(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("User.fromJson"));
    }

    #[test]
    fn test_detects_all_names() {
        let mut builder = class("User");
        for name in ["fromMap", "toMap", "fromDocument", "toDocument"] {
            builder = builder.method(method(name).build());
        }
        assert_eq!(check_code(ENTITY_PATH, builder.build()).len(), 4);
    }

    #[test]
    fn test_allows_model_serialization() {
        let diagnostics = check_code(
            "lib/features/auth/data/models/user_model.dart",
            class("UserModel")
                .extends(ty("User"))
                .constructor(factory_constructor("fromJson"))
                .method(method("toJson").build())
                .build(),
        );
        assert!(diagnostics.is_empty());
    }
}
