//! Layer import boundary enforcement.
//!
//! This module provides a builder for rules that forbid a source layer
//! from importing files of another layer or a fixed set of packages.
//!
//! # Example
//!
//! ```
//! use cma_lint_rules::{ImportBoundaryRule, Layer};
//!
//! let rule = ImportBoundaryRule::new("X001", "domain_no_http")
//!     .from_layer(Layer::Domain)
//!     .forbid_packages(&["package:dio/", "package:http/"]);
//! ```
//!
//! Both relative (`../../data/models/user_model.dart`) and package
//! (`package:app/features/auth/data/models/user_model.dart`) URIs are
//! normalized before fragment matching.

use cma_lint_core::utils::contains_fragment;
use cma_lint_core::utils::paths::normalize_str;
use cma_lint_core::{CompilationUnit, Diagnostic, FileContext, Rule, Severity};

/// Directory-convention layer a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// `/domain/`
    Domain,
    /// `/data/`
    Data,
    /// `/presentation/`
    Presentation,
}

impl Layer {
    fn contains(self, ctx: &FileContext) -> bool {
        match self {
            Self::Domain => ctx.config.is_domain_path(ctx.path),
            Self::Data => ctx.config.is_data_path(ctx.path),
            Self::Presentation => ctx.config.is_presentation_path(ctx.path),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Data => "Data",
            Self::Presentation => "Presentation",
        }
    }
}

/// Directory fragments that mark data-layer files.
pub const DATA_FRAGMENTS: &[&str] = &["data", "models", "datasources"];

/// Directory fragments that mark presentation-layer files.
pub const PRESENTATION_FRAGMENTS: &[&str] =
    &["presentation", "blocs", "cubits", "pages", "widgets", "screens"];

/// Flutter UI libraries.
pub const FLUTTER_UI_IMPORTS: &[&str] = &[
    "package:flutter/material.dart",
    "package:flutter/widgets.dart",
    "package:flutter/cupertino.dart",
];

/// HTTP and storage client packages.
pub const DATA_CLIENT_IMPORTS: &[&str] = &[
    "package:dio/",
    "package:http/",
    "package:sqflite/",
    "package:hive/",
    "package:shared_preferences/",
];

/// Builder for import boundary rules.
#[derive(Debug, Clone)]
pub struct ImportBoundaryRule {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    correction: Option<&'static str>,
    source: Layer,
    target: &'static str,
    fragments: Vec<&'static str>,
    packages: Vec<&'static str>,
    severity: Severity,
}

impl ImportBoundaryRule {
    /// Creates a new import boundary rule builder.
    ///
    /// # Arguments
    ///
    /// * `code` - Rule code (e.g., "CMA010")
    /// * `name` - Rule id (e.g., "domain_no_data_imports")
    #[must_use]
    pub fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            description: "",
            correction: None,
            source: Layer::Domain,
            target: "forbidden",
            fragments: Vec::new(),
            packages: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Sets the layer whose files are checked.
    #[must_use]
    pub fn from_layer(mut self, layer: Layer) -> Self {
        self.source = layer;
        self
    }

    /// Sets the layer label used in messages (e.g., "data").
    #[must_use]
    pub fn target(mut self, label: &'static str) -> Self {
        self.target = label;
        self
    }

    /// Forbids imports whose URI contains any of these directory fragments.
    #[must_use]
    pub fn forbid_fragments(mut self, fragments: &[&'static str]) -> Self {
        self.fragments.extend_from_slice(fragments);
        self
    }

    /// Forbids imports whose URI starts with any of these prefixes.
    #[must_use]
    pub fn forbid_packages(mut self, packages: &[&'static str]) -> Self {
        self.packages.extend_from_slice(packages);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Sets the correction hint.
    #[must_use]
    pub fn with_correction(mut self, correction: &'static str) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Sets the default severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the reason `uri` is forbidden, if it is.
    fn violation(&self, uri: &str) -> Option<String> {
        let uri = uri.trim();
        if let Some(package) = self.packages.iter().find(|p| uri.starts_with(**p)) {
            return Some(format!("`{package}`"));
        }
        // dart: core libraries never cross a layer
        if uri.starts_with("dart:") {
            return None;
        }
        let normalized = normalize_str(uri.strip_prefix("package:").unwrap_or(uri));
        self.fragments
            .iter()
            .find(|fragment| contains_fragment(&normalized, fragment))
            .map(|fragment| format!("a `/{fragment}/` path"))
    }
}

impl Rule for ImportBoundaryRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn code(&self) -> &'static str {
        self.code
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn correction(&self) -> Option<&'static str> {
        self.correction
    }

    fn check(&self, ctx: &FileContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        if !self.source.contains(ctx) {
            return Vec::new();
        }

        unit.imports()
            .filter_map(|import| {
                let reason = self.violation(&import.uri)?;
                Some(self.diagnostic(
                    ctx,
                    import.span,
                    format!(
                        "{} layer must not import {} code: '{}' matches {reason}",
                        self.source.label(),
                        self.target,
                        import.uri
                    ),
                ))
            })
            .collect()
    }
}
