//! Rule flagging `MultiBlocProvider` inside widget `build` methods.
//!
//! Providers created in `build` are recreated on every rebuild, which
//! throws away Bloc state. Global Blocs belong at the application root
//! (or are resolved from the service locator), not in a screen's tree.

use cma_lint_core::syntax::visit::{self, Visit};
use cma_lint_core::syntax::{ClassDecl, Expr};
use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Rule code for `bloc_in_multiprovider`.
pub const CODE: &str = "CMA014";

/// Rule name for `bloc_in_multiprovider`.
pub const NAME: &str = "bloc_in_multiprovider";

const MULTI_PROVIDER: &str = "MultiBlocProvider";
const BUILD_METHOD: &str = "build";
const SCREEN_SUFFIXES: &[&str] = &["Widget", "View", "Page", "Screen"];

/// Flags `MultiBlocProvider` built inside a widget's `build` method.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlocInMultiProvider;

impl BlocInMultiProvider {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Returns true for classes extending `*Widget`, `State<..>`, or a
/// `*View`/`*Page`/`*Screen` base.
fn is_widget_like(class: &ClassDecl) -> bool {
    class.extends.as_ref().is_some_and(|base| {
        let name = base.base_name();
        name == "State" || SCREEN_SUFFIXES.iter().any(|s| name.ends_with(s))
    })
}

impl Rule for BlocInMultiProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "MultiBlocProvider should not be created inside a widget build method"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn correction(&self) -> Option<&'static str> {
        Some("Provide global Blocs at the app root or resolve them from the service locator")
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for class in unit.classes().filter(|c| is_widget_like(c)) {
            for build in class
                .methods()
                .filter(|m| m.name == BUILD_METHOD && !m.is_static)
            {
                let mut finder = ProviderFinder::default();
                visit::visit_function_body(&mut finder, &build.body);

                diagnostics.extend(finder.found.into_iter().map(|expr| {
                    self.diagnostic(
                        ctx,
                        expr.span(),
                        format!(
                            "`{}.build` creates a {MULTI_PROVIDER}; Blocs are recreated on every rebuild",
                            class.name
                        ),
                    )
                }));
            }
        }

        diagnostics
    }
}

#[derive(Default)]
struct ProviderFinder<'ast> {
    found: Vec<&'ast Expr>,
}

impl<'ast> Visit<'ast> for ProviderFinder<'ast> {
    fn visit_expr(&mut self, node: &'ast Expr) {
        if node.invoked_name() == Some(MULTI_PROVIDER) {
            self.found.push(node);
        }
        visit::visit_expr(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run;
    use cma_lint_core::syntax::build::*;
    use cma_lint_core::syntax::FunctionBody;

    const PAGE_PATH: &str = "lib/features/auth/presentation/pages/login_page.dart";

    fn widget(name: &str, base: &str, body: FunctionBody) -> Vec<Diagnostic> {
        let class = class(name)
            .extends(ty(base))
            .method(
                method("build")
                    .returns(ty("Widget"))
                    .param(param("context", ty("BuildContext")))
                    .body(body)
                    .build(),
            )
            .build();
        run(&BlocInMultiProvider::new(), PAGE_PATH, &unit().class(class).build())
    }

    fn multi_provider() -> Expr {
        new_instance_named(
            "MultiBlocProvider",
            [
                ("providers", Expr::List { elements: Vec::new(), span: Default::default() }),
                ("child", new_instance("LoginView", [])),
            ],
        )
    }

    #[test]
    fn test_detects_provider_in_stateless_widget() {
        let diagnostics = widget("LoginPage", "StatelessWidget", expr_body(multi_provider()));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("LoginPage.build"));
    }

    #[test]
    fn test_detects_provider_in_state_class() {
        let diagnostics = widget(
            "_LoginPageState",
            "State",
            block_body([return_stmt(multi_provider())]),
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_detects_provider_nested_in_builder_closure() {
        let body = expr_body(new_instance_named(
            "LayoutBuilder",
            [("builder", closure(call("MultiBlocProvider", [])))],
        ));
        let diagnostics = widget("HomeScreen", "BaseScreen", body);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_allows_single_bloc_provider() {
        let diagnostics = widget(
            "LoginPage",
            "StatelessWidget",
            expr_body(new_instance("BlocProvider", [])),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_non_widget_classes() {
        let diagnostics = widget("AppProviders", "Object", expr_body(multi_provider()));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_provider_outside_build() {
        let class = class("App")
            .extends(ty("StatelessWidget"))
            .method(method("providers").arrow(multi_provider()).build())
            .build();
        let diagnostics = run(&BlocInMultiProvider::new(), PAGE_PATH, &unit().class(class).build());
        assert!(diagnostics.is_empty());
    }
}
