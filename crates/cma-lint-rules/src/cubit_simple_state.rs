//! Rule keeping global Cubits free of business logic.
//!
//! App-wide Cubits under `core/cubits/` (theme, locale, connectivity) hold
//! simple state. Depending on repositories or use cases, or awaiting work
//! inside `try` blocks, means feature logic has leaked into them.

use cma_lint_core::syntax::visit::{self, Visit};
use cma_lint_core::syntax::{ClassDecl, Expr, Statement};
use cma_lint_core::utils::mentions_any_suffix;
use cma_lint_core::{
    extends_base, ClassRole, CompilationUnit, Diagnostic, FileContext, Rule, Severity,
};

/// Rule code for `cubit_simple_state`.
pub const CODE: &str = "CMA016";

/// Rule name for `cubit_simple_state`.
pub const NAME: &str = "cubit_simple_state";

/// Type-name suffixes of business-logic collaborators.
const LOGIC_DEPENDENCIES: &[&str] = &[
    "Repository",
    "UseCase",
    "Usecase",
    "Service",
    "DataSource",
    "Datasource",
];

/// Flags business logic in global Cubits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubitSimpleState;

impl CubitSimpleState {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn is_cubit_like(ctx: &FileContext, class: &ClassDecl) -> bool {
        extends_base(class, "Cubit")
            || matches!(ctx.role(class), ClassRole::GlobalCubit | ClassRole::Cubit)
    }
}

impl Rule for CubitSimpleState {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Global Cubits should hold simple state without business logic"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Move the logic into a feature Bloc or a use case")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        if !ctx.config.is_global_cubit_path(ctx.path) {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        for class in unit.classes().filter(|c| Self::is_cubit_like(ctx, c)) {
            for field in class.fields().filter(|f| !f.is_static) {
                // heuristic: rendered type text, no symbol resolution
                let Some(ty) = &field.ty else { continue };
                let rendered = ty.to_string();
                if mentions_any_suffix(&rendered, LOGIC_DEPENDENCIES) {
                    diagnostics.push(self.diagnostic(
                        ctx,
                        field.span,
                        format!(
                            "Global cubit `{}` depends on `{rendered}`; keep global state simple",
                            class.name
                        ),
                    ));
                }
            }

            for method in class.methods() {
                let mut scan = AsyncLogicScan::default();
                visit::visit_function_body(&mut scan, &method.body);
                if scan.has_try && scan.has_async_wait {
                    diagnostics.push(self.diagnostic(
                        ctx,
                        method.name_span,
                        format!(
                            "Global cubit `{}` runs async logic in `{}`; move it to a use case",
                            class.name, method.name
                        ),
                    ));
                }
            }
        }

        diagnostics
    }
}

#[derive(Default)]
struct AsyncLogicScan {
    has_try: bool,
    has_async_wait: bool,
}

impl<'ast> Visit<'ast> for AsyncLogicScan {
    fn visit_statement(&mut self, node: &'ast Statement) {
        if matches!(node, Statement::Try { .. }) {
            self.has_try = true;
        }
        visit::visit_statement(self, node);
    }

    fn visit_expr(&mut self, node: &'ast Expr) {
        match node {
            Expr::Await { .. } => self.has_async_wait = true,
            Expr::MethodInvocation {
                target: Some(_),
                method,
                ..
            } if method == "then" => self.has_async_wait = true,
            _ => {}
        }
        visit::visit_expr(self, node);
    }
}
