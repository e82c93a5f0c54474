//! Rule forbidding `copyWith` on entities.
//!
//! # Rationale
//!
//! Entities are immutable value carriers of the domain. Copy-and-modify
//! helpers are a data-layer convenience and belong on the model.
//!
//! # Detected Patterns
//!
//! ```dart
//! class User {
//!   final String name;
//!   const User({required this.name});
//!   User copyWith({String? name}) => User(name: name ?? this.name); // flagged
//! }
//! ```

use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

use crate::entity_members::{entity_classes, method_owner, Owner};

/// Rule code for `entity_no_copywith`.
pub const CODE: &str = "CMA002";

/// Rule name for `entity_no_copywith`.
pub const NAME: &str = "entity_no_copywith";

/// Forbids `copyWith` methods on entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNoCopyWith;

impl EntityNoCopyWith {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for EntityNoCopyWith {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Entities must not define copyWith"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Move copyWith to the data model that extends this entity")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for class in entity_classes(ctx, unit) {
            for method in class.methods() {
                if method_owner(method) == Owner::CopyWith {
                    diagnostics.push(self.diagnostic(
                        ctx,
                        method.name_span,
                        format!("Entity `{}` must not define `copyWith`", class.name),
                    ));
                }
            }
        }
        diagnostics
    }
}
