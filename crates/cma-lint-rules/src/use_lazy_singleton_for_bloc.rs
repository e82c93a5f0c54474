//! Rule requiring lazy singleton registration for Blocs and Cubits.
//!
//! # Rationale
//!
//! With `get_it`, `registerFactory` builds a fresh state unit on every
//! lookup, so two widgets asking for `AuthBloc` see different states.
//! `registerSingleton` builds it eagerly at startup, before anything
//! needs it. `registerLazySingleton` is the intended registration.
//!
//! # Detected Patterns
//!
//! ```dart
//! sl.registerFactory(() => AuthBloc(login: sl()));   // flagged
//! sl.registerSingleton<AuthBloc>(AuthBloc());        // flagged
//! sl.registerFactory(() => AuthBloc.create(sl()));   // flagged
//! sl.registerLazySingleton(() => AuthBloc());        // ok
//! sl.registerFactory(() => AuthRepositoryImpl());    // ok, not a state unit
//! ```

use cma_lint_core::syntax::visit::{self, Visit};
use cma_lint_core::syntax::{Argument, Expr, TypeAnnotation};
use cma_lint_core::utils::mentions_any_suffix;
use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Rule code for `use_lazy_singleton_for_bloc`.
pub const CODE: &str = "CMA013";

/// Rule name for `use_lazy_singleton_for_bloc`.
pub const NAME: &str = "use_lazy_singleton_for_bloc";

/// Registration calls that do not fit a Bloc's lifecycle.
const DISCOURAGED_REGISTRATIONS: &[&str] = &["registerFactory", "registerSingleton"];

/// Requires `registerLazySingleton` for Bloc and Cubit registrations.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseLazySingletonForBloc;

impl UseLazySingletonForBloc {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UseLazySingletonForBloc {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Blocs and Cubits should be registered with registerLazySingleton"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Use `registerLazySingleton` for Blocs and Cubits")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let naming = &ctx.config.naming;
        let mut visitor = RegistrationVisitor {
            ctx,
            rule: self,
            suffixes: [naming.bloc_suffix.as_str(), naming.cubit_suffix.as_str()],
            diagnostics: Vec::new(),
        };
        visitor.visit_compilation_unit(unit);
        visitor.diagnostics
    }
}

struct RegistrationVisitor<'a> {
    ctx: &'a FileContext<'a>,
    rule: &'a UseLazySingletonForBloc,
    suffixes: [&'a str; 2],
    diagnostics: Vec<Diagnostic>,
}

impl RegistrationVisitor<'_> {
    /// Name of the state unit a registration call produces, if any.
    ///
    /// Heuristic: matches type names by suffix, first on the explicit type
    /// argument, then on what the factory argument evaluates to.
    fn registered_state_unit(
        &self,
        type_arguments: &[TypeAnnotation],
        arguments: &[Argument],
    ) -> Option<String> {
        if let Some(ty) = type_arguments
            .iter()
            .map(ToString::to_string)
            .find(|text| mentions_any_suffix(text, &self.suffixes))
        {
            return Some(ty);
        }

        let produced = arguments.iter().find(|a| a.name.is_none())?;
        let produced = match &produced.value {
            Expr::Closure { body, .. } => body.returned_expr()?,
            other => other,
        };
        let Some(name) = produced.invoked_name() else {
            let text = produced.to_string();
            return mentions_any_suffix(&text, &self.suffixes).then_some(text);
        };
        if mentions_any_suffix(name, &self.suffixes) {
            return Some(name.to_string());
        }
        // `AuthBloc.create(...)`: a named constructor or static factory on the type.
        let receiver = receiver_path(produced)?;
        mentions_any_suffix(&receiver, &self.suffixes).then_some(receiver)
    }
}

/// Rendered receiver of an invocation when it is a plain name or a dotted
/// path. Receivers that are calls themselves are skipped, so arguments
/// nested in them are never matched.
fn receiver_path(expr: &Expr) -> Option<String> {
    let Expr::MethodInvocation {
        target: Some(target),
        ..
    } = expr
    else {
        return None;
    };
    is_name_path(target).then(|| target.to_string())
}

fn is_name_path(expr: &Expr) -> bool {
    match expr {
        Expr::Identifier { .. } => true,
        Expr::PropertyAccess { target, .. } => is_name_path(target),
        _ => false,
    }
}

impl<'ast> Visit<'ast> for RegistrationVisitor<'_> {
    fn visit_expr(&mut self, node: &'ast Expr) {
        if let Expr::MethodInvocation {
            method,
            type_arguments,
            arguments,
            span,
            ..
        } = node
        {
            if DISCOURAGED_REGISTRATIONS.contains(&method.as_str()) {
                if let Some(unit) = self.registered_state_unit(type_arguments, arguments) {
                    self.diagnostics.push(self.rule.diagnostic(
                        self.ctx,
                        *span,
                        format!(
                            "`{unit}` is registered with `{method}`; use `registerLazySingleton`"
                        ),
                    ));
                }
            }
        }

        visit::visit_expr(self, node);
    }
}
