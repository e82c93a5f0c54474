//! Rule enforcing Bloc, Event, and State naming.
//!
//! Applies to files under a `bloc/` or `blocs/` directory and to files named
//! `*_bloc.dart`, `*_event.dart`, or `*_state.dart`.
//!
//! ```dart
//! class AuthManager extends Bloc<AuthAction, AuthStatus> {}  // 3 findings
//! class AuthBloc extends Bloc<AuthEvent, AuthState> {}       // ok
//! ```

use cma_lint_core::syntax::{ClassDecl, ClassKind, TypeAnnotation};
use cma_lint_core::utils::paths::contains_fragment;
use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Rule code for `bloc_naming_convention`.
pub const CODE: &str = "CMA015";

/// Rule name for `bloc_naming_convention`.
pub const NAME: &str = "bloc_naming_convention";

const EVENT_SUFFIX: &str = "Event";
const STATE_SUFFIX: &str = "State";
const BLOC_DIRECTORIES: &[&str] = &["bloc", "blocs"];
const BLOC_FILE_SUFFIXES: &[&str] = &["_bloc.dart", "_event.dart", "_state.dart"];

/// Enforces suffixes on Blocs and their event and state types.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlocNamingConvention;

impl BlocNamingConvention {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn applies_to(ctx: &FileContext) -> bool {
        let file = ctx.file_name();
        BLOC_DIRECTORIES
            .iter()
            .any(|dir| contains_fragment(&ctx.normalized, dir))
            || BLOC_FILE_SUFFIXES.iter().any(|s| file.ends_with(s))
    }

    fn check_bloc(
        &self,
        ctx: &FileContext,
        class: &ClassDecl,
        base: &TypeAnnotation,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let suffix = ctx.config.naming.bloc_suffix.as_str();

        if !class.name.ends_with(suffix) {
            diagnostics.push(self.diagnostic(
                ctx,
                class.name_span,
                format!("Bloc class `{}` should end with `{suffix}`", class.name),
            ));
        }

        let expected = [(0, EVENT_SUFFIX, "event"), (1, STATE_SUFFIX, "state")];
        for (index, type_suffix, label) in expected {
            let Some(argument) = base.arguments.get(index) else {
                continue;
            };
            if !argument.base_name().ends_with(type_suffix) {
                diagnostics.push(self.diagnostic(
                    ctx,
                    class.name_span,
                    format!(
                        "Bloc `{}` uses {label} type `{argument}`; {label} types should end with `{type_suffix}`",
                        class.name
                    ),
                ));
            }
        }

        diagnostics
    }

    fn check_member_type(
        &self,
        ctx: &FileContext,
        class: &ClassDecl,
        type_suffix: &str,
        label: &str,
    ) -> Option<Diagnostic> {
        if class.name.ends_with(type_suffix) {
            return None;
        }
        // Subclasses of a sealed event/state root keep their own names.
        let subtype = class
            .extends
            .iter()
            .chain(&class.implements)
            .any(|t| t.base_name().ends_with(type_suffix));
        if subtype {
            return None;
        }
        Some(self.diagnostic(
            ctx,
            class.name_span,
            format!(
                "{label} class `{}` should end with `{type_suffix}` or extend a `*{type_suffix}` type",
                class.name
            ),
        ))
    }
}

impl Rule for BlocNamingConvention {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Blocs, events, and states must follow the naming convention"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Rename to `<Feature>Bloc`, `<Feature>Event`, and `<Feature>State`")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        if !Self::applies_to(ctx) {
            return Vec::new();
        }

        let file = ctx.file_name();
        let mut diagnostics = Vec::new();

        for class in unit.classes().filter(|c| c.class_kind == ClassKind::Class) {
            if let Some(base) = class.extends.as_ref().filter(|b| b.base_name() == "Bloc") {
                diagnostics.extend(self.check_bloc(ctx, class, base));
            } else if file.ends_with("_event.dart") {
                diagnostics.extend(self.check_member_type(ctx, class, EVENT_SUFFIX, "Event"));
            } else if file.ends_with("_state.dart") {
                diagnostics.extend(self.check_member_type(ctx, class, STATE_SUFFIX, "State"));
            }
        }

        diagnostics
    }
}
