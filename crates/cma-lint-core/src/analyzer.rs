//! Rule registry and dispatch.

use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Configuration;
use crate::context::{FileContext, SourceUnit};
use crate::rule::{Rule, RuleBox};
use crate::types::{Diagnostic, LintResult, Severity};

/// Builder for configuring an [`Analyzer`].
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Arc<Configuration>>,
    skip_generated: bool,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            config: None,
            skip_generated: true,
        }
    }
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a list of boxed rules, typically `cma_lint_rules::all_rules()`.
    #[must_use]
    pub fn rules<I: IntoIterator<Item = RuleBox>>(mut self, rules: I) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Configuration) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    /// Sets a configuration snapshot shared with other analyzers.
    #[must_use]
    pub fn shared_config(mut self, config: Arc<Configuration>) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether code-generator output is skipped (default: true).
    #[must_use]
    pub fn skip_generated(mut self, skip: bool) -> Self {
        self.skip_generated = skip;
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
            skip_generated: self.skip_generated,
        }
    }
}

/// Immutable rule set bound to a configuration snapshot.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer holds
/// no mutable state, so one instance can check any number of units from
/// any number of threads.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Arc<Configuration>,
    skip_generated: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the configuration snapshot.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Iterates over registered rules.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Keeps only the rules whose id or code is listed.
    ///
    /// Codes compare case-insensitively; unknown entries are ignored.
    #[must_use]
    pub fn only<S: AsRef<str>>(mut self, ids: &[S]) -> Self {
        self.rules.retain(|rule| {
            ids.iter().any(|id| {
                let id = id.as_ref().trim();
                rule.name() == id || rule.code().eq_ignore_ascii_case(id)
            })
        });
        self
    }

    /// Severity a rule's diagnostics are reported at.
    #[must_use]
    pub fn effective_severity(&self, rule: &dyn Rule) -> Severity {
        self.config
            .severity_override(rule.name())
            .unwrap_or_else(|| rule.default_severity())
    }

    /// Runs every enabled rule over one unit.
    ///
    /// Severity overrides are applied, rules resolved to `ignore` are
    /// skipped, and a panicking rule contributes no diagnostics.
    #[must_use]
    pub fn check_unit(&self, unit: &SourceUnit) -> Vec<Diagnostic> {
        if !self.config.is_lint_enabled() {
            return Vec::new();
        }
        if self.skip_generated && unit.is_generated() {
            debug!("Skipping generated file: {}", unit.path.display());
            return Vec::new();
        }

        let ctx = FileContext::new(&unit.path, &self.config);
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            let severity = self.effective_severity(&**rule);
            if severity == Severity::Ignore {
                debug!("Skipping ignored rule: {}", rule.name());
                continue;
            }

            let found = match catch_unwind(AssertUnwindSafe(|| rule.check(&ctx, &unit.unit))) {
                Ok(found) => found,
                Err(_) => {
                    warn!(
                        "Rule {} panicked on {}; no diagnostics reported",
                        rule.name(),
                        unit.path.display()
                    );
                    continue;
                }
            };

            diagnostics.extend(found.into_iter().map(|mut d| {
                d.severity = severity;
                d
            }));
        }

        diagnostics
    }

    /// Checks all units in parallel and returns sorted results.
    #[must_use]
    pub fn analyze(&self, units: &[SourceUnit]) -> LintResult {
        info!(
            "Analyzing {} units with {} rules",
            units.len(),
            self.rules.len()
        );

        let per_unit: Vec<Vec<Diagnostic>> =
            units.par_iter().map(|unit| self.check_unit(unit)).collect();

        let mut result = LintResult {
            diagnostics: per_unit.into_iter().flatten().collect(),
            files_checked: units.len(),
        };
        result.sort();

        info!(
            "Analysis complete: {} diagnostics in {} files",
            result.diagnostics.len(),
            result.files_checked
        );

        result
    }
}
