//! Rule requiring repository contracts to speak in entities.
//!
//! # Rationale
//!
//! The domain layer defines what a repository returns. If the contract
//! mentions a model, the domain depends on the data layer through the back
//! door.
//!
//! # Detected Patterns
//!
//! ```dart
//! abstract class AuthRepository {
//!   Future<Either<Failure, UserModel>> login(); // flagged
//!   Future<Either<Failure, User>> current();    // ok
//! }
//! ```
//!
//! The check is heuristic: the return type is rendered to text and
//! searched for a type name ending in the model suffix. Aliased types are
//! not resolved.

use cma_lint_core::utils::mentions_type_with_suffix;
use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Rule code for `repository_interface_returns_entity`.
pub const CODE: &str = "CMA008";

/// Rule name for `repository_interface_returns_entity`.
pub const NAME: &str = "repository_interface_returns_entity";

/// Requires repository interface methods to return entities, not models.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryInterfaceReturnsEntity;

impl RepositoryInterfaceReturnsEntity {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RepositoryInterfaceReturnsEntity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Repository interfaces must return entities, not models"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Return the domain entity and convert the model inside the repository implementation")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        if !ctx.config.is_repository_interface_path(ctx.path) {
            return Vec::new();
        }
        let suffix = ctx.config.naming.model_suffix.as_str();

        let mut diagnostics = Vec::new();
        for class in unit.classes().filter(|c| c.is_abstract_like()) {
            for method in class.methods() {
                let Some(return_type) = &method.return_type else {
                    continue;
                };
                // heuristic: textual match on the rendered type
                let rendered = return_type.to_string();
                if mentions_type_with_suffix(&rendered, suffix) {
                    diagnostics.push(self.diagnostic(
                        ctx,
                        method.name_span,
                        format!(
                            "`{}.{}` returns `{rendered}`; repository interfaces must return entities",
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

    const REPO_PATH: &str = "lib/features/auth/domain/repositories/auth_repository.dart";

    fn check_code(path: &str, class: ClassDecl) -> Vec<Diagnostic> {
        run(&RepositoryInterfaceReturnsEntity::new(), path, &unit().class(class).build())
    }

    fn either_of(inner: &str) -> cma_lint_core::syntax::TypeAnnotation {
        generic("Future", [generic("Either", [ty("Failure"), ty(inner)])])
    }

    #[test]
    fn test_detects_model_in_nested_generic() {
        let diagnostics = check_code(
            REPO_PATH,
            class("AuthRepository")
                .abstract_()
                .method(method("login").returns(either_of("UserModel")).build())
                .build(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .contains("Future<Either<Failure, UserModel>>"));
    }

    #[test]
    fn test_allows_entity() {
        let diagnostics = check_code(
            REPO_PATH,
            class("AuthRepository")
                .abstract_()
                .method(method("login").returns(either_of("User")).build())
                .build(),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_concrete_classes() {
        let diagnostics = check_code(
            REPO_PATH,
            class("AuthRepositoryHelper")
                .method(method("login").returns(either_of("UserModel")).build())
                .build(),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_data_layer() {
        let diagnostics = check_code(
            "lib/features/auth/data/repositories/auth_repository_impl.dart",
            class("AuthRepositoryBase")
                .abstract_()
                .method(method("login").returns(either_of("UserModel")).build())
                .build(),
        );
        assert!(diagnostics.is_empty());
    }
}
