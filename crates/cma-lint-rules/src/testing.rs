//! Shared helpers for rule unit tests.

use cma_lint_core::{CompilationUnit, Configuration, Diagnostic, FileContext, Rule};
use std::path::Path;

/// Runs `rule` over `unit` at `path` with the default configuration.
pub(crate) fn run(rule: &dyn Rule, path: &str, unit: &CompilationUnit) -> Vec<Diagnostic> {
    run_with(rule, &Configuration::default(), path, unit)
}

/// Runs `rule` over `unit` at `path` with the given configuration.
pub(crate) fn run_with(
    rule: &dyn Rule,
    config: &Configuration,
    path: &str,
    unit: &CompilationUnit,
) -> Vec<Diagnostic> {
    let ctx = FileContext::new(Path::new(path), config);
    rule.check(&ctx, unit)
}

/// Parses a configuration snippet, panicking on bad test input.
pub(crate) fn config(yaml: &str) -> Configuration {
    Configuration::parse(yaml).unwrap()
}
