//! Rule requiring models to extend their entity.
//!
//! A model is the data-layer face of an entity: it adds serialization and
//! mutation helpers on top. A model that stands alone duplicates the
//! entity's fields and lets the two drift apart.
//!
//! ```dart
//! class UserModel extends User { ... }   // ok
//! class UserModel { ... }                // flagged
//! class UserModel extends Object { ... } // flagged
//! ```

use cma_lint_core::syntax::ClassKind;
use cma_lint_core::{ClassRole, CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Rule code for `model_extends_entity`.
pub const CODE: &str = "CMA006";

/// Rule name for `model_extends_entity`.
pub const NAME: &str = "model_extends_entity";

/// Requires model classes to extend an entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelExtendsEntity;

impl ModelExtendsEntity {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModelExtendsEntity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Models must extend their corresponding entity"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Make the model extend its entity, e.g. `class UserModel extends User`")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        unit.classes()
            .filter(|class| class.class_kind == ClassKind::Class)
            .filter(|class| ctx.role(class) == ClassRole::Model)
            .filter(|class| {
                class
                    .extends
                    .as_ref()
                    .map_or(true, |ty| ty.base_name() == "Object")
            })
            .map(|class| {
                self.diagnostic(
                    ctx,
                    class.name_span,
                    format!("Model `{}` must extend an entity", class.name),
                )
            })
            .collect()
    }
}
