//! Rule requiring the model suffix on classes in model directories.

use cma_lint_core::syntax::ClassKind;
use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Rule code for `model_naming_convention`.
pub const CODE: &str = "CMA007";

/// Rule name for `model_naming_convention`.
pub const NAME: &str = "model_naming_convention";

/// Requires classes under model paths to carry the configured suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelNamingConvention;

impl ModelNamingConvention {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ModelNamingConvention {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Model classes must end with the configured model suffix"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Rename the class to end with the model suffix, e.g. `UserModel`")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let suffix = ctx.config.naming.model_suffix.as_str();
        if suffix.is_empty() || !ctx.classifier.is_model_location(ctx.path) {
            return Vec::new();
        }

        unit.classes()
            .filter(|class| class.class_kind == ClassKind::Class)
            // private helpers and generated mixins are not models
            .filter(|class| !class.name.starts_with('_'))
            .filter(|class| !class.name.ends_with(suffix))
            .map(|class| {
                self.diagnostic(
                    ctx,
                    class.name_span,
                    format!(
                        "Model class `{}` should end with `{suffix}` (e.g. `{}{suffix}`)",
                        class.name, class.name
                    ),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{config, run, run_with};
    use cma_lint_core::syntax::build::*;

    const MODEL_PATH: &str = "lib/features/auth/data/models/user_model.dart";

    #[test]
    fn test_detects_missing_suffix() {
        let diagnostics = run(
            &ModelNamingConvention::new(),
            MODEL_PATH,
            &unit().class(class("UserDto").build()).build(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("UserDtoModel"));
    }

    #[test]
    fn test_allows_suffix() {
        let diagnostics = run(
            &ModelNamingConvention::new(),
            MODEL_PATH,
            &unit().class(class("UserModel").build()).build(),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_respects_configured_suffix() {
        let cfg = config("clean_modular_architecture:\n  naming:\n    model_suffix: Dto\n");
        let unit = unit()
            .class(class("UserDto").build())
            .class(class("UserModel").build())
            .build();
        let diagnostics = run_with(&ModelNamingConvention::new(), &cfg, MODEL_PATH, &unit);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("UserModel"));
    }

    #[test]
    fn test_ignores_other_paths() {
        let diagnostics = run(
            &ModelNamingConvention::new(),
            "lib/features/auth/data/datasources/remote.dart",
            &unit().class(class("AuthRemoteDataSource").build()).build(),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_private_classes() {
        let diagnostics = run(
            &ModelNamingConvention::new(),
            MODEL_PATH,
            &unit().class(class("_Keys").build()).build(),
        );
        assert!(diagnostics.is_empty());
    }
}
