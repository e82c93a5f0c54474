//! # cma-lint-core
//!
//! Core framework for Clean Modular Architecture linting over
//! host-supplied syntax trees.
//!
//! This crate provides the foundational types the rule suite builds on:
//!
//! - [`syntax`]: the serde-serializable tree a host lowers its parse into
//! - [`Configuration`]: the project settings snapshot
//! - [`Classifier`]: path and shape based [`ClassRole`] inference
//! - [`Rule`]: the per-file rule contract
//! - [`Analyzer`]: rule registry, dispatch and severity resolution
//! - [`Diagnostic`] / [`LintResult`]: findings
//!
//! ## Example
//!
//! ```ignore
//! use cma_lint_core::{Analyzer, Configuration, SourceUnit};
//!
//! let analyzer = Analyzer::builder()
//!     .config(Configuration::load(project_dir))
//!     .rules(cma_lint_rules::all_rules())
//!     .build();
//!
//! let result = analyzer.analyze(&units);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod classifier;
mod config;
mod context;
mod rule;
mod types;

pub mod syntax;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use classifier::{extends_base, ClassRole, Classifier};
pub use config::{
    ConfigError, Configuration, DiPackage, LintConfig, NamingConfig, StateManagement,
    StructureConfig, TemplatesConfig, CONFIG_FILE_NAMES, CONFIG_KEY,
};
pub use context::{FileContext, SourceUnit, UnitError};
pub use rule::{Rule, RuleBox};
pub use syntax::CompilationUnit;
pub use types::{Diagnostic, LintResult, Location, RenderedDiagnostic, Severity, UnknownSeverity};
