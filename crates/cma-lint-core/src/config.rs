//! Project configuration snapshot.
//!
//! Read from the `clean_modular_architecture` key of a YAML file in the
//! project root:
//!
//! ```yaml
//! clean_modular_architecture:
//!   structure:
//!     features_path: lib/features
//!     core_path: lib/core
//!     entity_patterns: [domain/entities]
//!     model_patterns: [data/models]
//!   naming:
//!     model_suffix: Model
//!   lint:
//!     enabled: true
//!     severity:
//!       entity_no_getters: info
//!   templates:
//!     state_management: bloc
//!     di_package: get_it
//! ```
//!
//! Every key is optional. A missing or unreadable file yields the defaults;
//! the snapshot is immutable once loaded and is shared read-only between
//! concurrent analyses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::types::Severity;
use crate::utils::paths::{contains_fragment, matches_pattern, normalize};

/// Config file names looked up in the project root, in order.
pub const CONFIG_FILE_NAMES: &[&str] =
    &["clean_modular_architecture.yaml", "analysis_options.yaml"];

/// Top-level key holding cma-lint settings.
pub const CONFIG_KEY: &str = "clean_modular_architecture";

/// Immutable project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Directory layout settings.
    pub structure: StructureConfig,
    /// Naming suffixes.
    pub naming: NamingConfig,
    /// Lint switches and severity overrides.
    pub lint: LintConfig,
    /// Code generation choices (read-only here).
    pub templates: TemplatesConfig,
}

/// Directory layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Root of feature modules.
    pub features_path: String,
    /// Root of shared core code.
    pub core_path: String,
    /// Path patterns identifying entity files.
    pub entity_patterns: Vec<String>,
    /// Path patterns identifying model files.
    pub model_patterns: Vec<String>,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            features_path: "lib/features".to_string(),
            core_path: "lib/core".to_string(),
            entity_patterns: vec!["domain/entities".to_string()],
            model_patterns: vec!["data/models".to_string()],
        }
    }
}

/// Naming suffixes per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Entity suffix; empty because entities carry no suffix by convention.
    pub entity_suffix: String,
    /// Model suffix.
    pub model_suffix: String,
    /// Repository suffix.
    pub repository_suffix: String,
    /// Bloc suffix.
    pub bloc_suffix: String,
    /// Cubit suffix.
    pub cubit_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            entity_suffix: String::new(),
            model_suffix: "Model".to_string(),
            repository_suffix: "Repository".to_string(),
            bloc_suffix: "Bloc".to_string(),
            cubit_suffix: "Cubit".to_string(),
        }
    }
}

/// Lint switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Master switch.
    pub enabled: bool,
    /// Raw severity tokens per rule id; validated lazily.
    pub severity: BTreeMap<String, String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: BTreeMap::new(),
        }
    }
}

/// Template choices consumed by the code generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// State-management package.
    pub state_management: String,
    /// Dependency-injection package.
    pub di_package: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            state_management: StateManagement::Bloc.as_str().to_string(),
            di_package: DiPackage::GetIt.as_str().to_string(),
        }
    }
}

/// State-management choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateManagement {
    /// `flutter_bloc` with Bloc classes.
    Bloc,
    /// `flutter_bloc` with Cubits only.
    Cubit,
    /// Riverpod.
    Riverpod,
    /// Provider.
    Provider,
}

impl StateManagement {
    const ALL: [Self; 4] = [Self::Bloc, Self::Cubit, Self::Riverpod, Self::Provider];

    /// Configuration token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bloc => "bloc",
            Self::Cubit => "cubit",
            Self::Riverpod => "riverpod",
            Self::Provider => "provider",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == token)
    }
}

/// Dependency-injection choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiPackage {
    /// `get_it` service locator.
    GetIt,
    /// `injectable` on top of `get_it`.
    Injectable,
    /// Riverpod providers.
    Riverpod,
}

impl DiPackage {
    const ALL: [Self; 3] = [Self::GetIt, Self::Injectable, Self::Riverpod];

    /// Configuration token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetIt => "get_it",
            Self::Injectable => "injectable",
            Self::Riverpod => "riverpod",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == token)
    }
}

/// On-disk shape. Sections are `Option` so that an empty `structure:` key
/// (YAML null) falls back to defaults instead of failing.
#[derive(Debug, Default, Deserialize)]
struct RawFile {
    #[serde(default, rename = "clean_modular_architecture")]
    section: Option<RawSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSection {
    structure: Option<StructureConfig>,
    naming: Option<NamingConfig>,
    lint: Option<LintConfig>,
    templates: Option<TemplatesConfig>,
}

impl Configuration {
    /// Loads the project configuration, falling back to defaults.
    ///
    /// Never fails: read and parse errors are logged at `debug` and the
    /// compiled-in defaults are returned.
    #[must_use]
    pub fn load(project_dir: &Path) -> Self {
        Self::try_load(project_dir).unwrap_or_else(|e| {
            debug!("Falling back to default configuration: {e}");
            Self::default()
        })
    }

    /// Loads the project configuration.
    ///
    /// A project without a config file yields `Ok(default)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn try_load(project_dir: &Path) -> Result<Self, ConfigError> {
        match Self::discover(project_dir) {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No configuration in {}, using defaults", project_dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Finds the config file in `project_dir`, if any.
    #[must_use]
    pub fn discover(project_dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| project_dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// Content without the `clean_modular_architecture` key (for example an
    /// `analysis_options.yaml` that only configures the analyzer) parses to
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or has mistyped values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Option<RawFile> = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        let section = raw.and_then(|r| r.section).unwrap_or_default();
        Ok(Self {
            structure: section.structure.unwrap_or_default(),
            naming: section.naming.unwrap_or_default(),
            lint: section.lint.unwrap_or_default(),
            templates: section.templates.unwrap_or_default(),
        })
    }

    /// Collects logical errors without failing.
    ///
    /// Unknown rule ids in `lint.severity` are not errors; they are ignored.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.structure.features_path.trim().is_empty() {
            errors.push("structure.features_path must not be empty".to_string());
        }
        if self.structure.core_path.trim().is_empty() {
            errors.push("structure.core_path must not be empty".to_string());
        }
        for (key, patterns) in [
            ("entity_patterns", &self.structure.entity_patterns),
            ("model_patterns", &self.structure.model_patterns),
        ] {
            for (i, pattern) in patterns.iter().enumerate() {
                if pattern.trim().is_empty() {
                    errors.push(format!("structure.{key}[{i}] must not be empty"));
                }
            }
        }

        for (key, suffix) in [
            ("model_suffix", &self.naming.model_suffix),
            ("repository_suffix", &self.naming.repository_suffix),
            ("bloc_suffix", &self.naming.bloc_suffix),
            ("cubit_suffix", &self.naming.cubit_suffix),
        ] {
            if suffix.trim().is_empty() {
                errors.push(format!("naming.{key} must not be empty"));
            }
        }

        for (rule, token) in &self.lint.severity {
            if token.parse::<Severity>().is_err() {
                errors.push(format!(
                    "lint.severity.{rule}: unknown severity '{token}' (expected one of: {})",
                    Severity::TOKENS.join(", ")
                ));
            }
        }

        if self.state_management().is_none() {
            errors.push(format!(
                "templates.state_management: unknown choice '{}' (expected one of: bloc, cubit, riverpod, provider)",
                self.templates.state_management
            ));
        }
        if self.di_package().is_none() {
            errors.push(format!(
                "templates.di_package: unknown choice '{}' (expected one of: get_it, injectable, riverpod)",
                self.templates.di_package
            ));
        }

        errors
    }

    /// Severity override for a rule, if one is configured and valid.
    #[must_use]
    pub fn severity_override(&self, rule_id: &str) -> Option<Severity> {
        self.lint
            .severity
            .get(rule_id)
            .and_then(|token| token.parse().ok())
    }

    /// Effective severity for a rule: the override if present, else `error`.
    #[must_use]
    pub fn severity(&self, rule_id: &str) -> Severity {
        self.severity_override(rule_id).unwrap_or(Severity::Error)
    }

    /// Returns true when linting is switched on.
    #[must_use]
    pub fn is_lint_enabled(&self) -> bool {
        self.lint.enabled
    }

    /// Parsed state-management choice.
    #[must_use]
    pub fn state_management(&self) -> Option<StateManagement> {
        StateManagement::parse(self.templates.state_management.trim())
    }

    /// Parsed DI-package choice.
    #[must_use]
    pub fn di_package(&self) -> Option<DiPackage> {
        DiPackage::parse(self.templates.di_package.trim())
    }

    /// Path matches a configured entity pattern.
    #[must_use]
    pub fn is_entity_path(&self, path: &Path) -> bool {
        let p = normalize(path);
        self.structure
            .entity_patterns
            .iter()
            .any(|pattern| matches_pattern(&p, pattern))
    }

    /// Path matches a configured model pattern.
    #[must_use]
    pub fn is_model_path(&self, path: &Path) -> bool {
        let p = normalize(path);
        self.structure
            .model_patterns
            .iter()
            .any(|pattern| matches_pattern(&p, pattern))
    }

    /// Path lies in a domain layer.
    #[must_use]
    pub fn is_domain_path(&self, path: &Path) -> bool {
        contains_fragment(&normalize(path), "domain")
    }

    /// Path lies in a data layer.
    #[must_use]
    pub fn is_data_path(&self, path: &Path) -> bool {
        contains_fragment(&normalize(path), "data")
    }

    /// Path lies in a presentation layer.
    #[must_use]
    pub fn is_presentation_path(&self, path: &Path) -> bool {
        contains_fragment(&normalize(path), "presentation")
    }

    /// Path lies under the configured core directory.
    #[must_use]
    pub fn is_core_path(&self, path: &Path) -> bool {
        let p = normalize(path);
        contains_fragment(&p, &self.structure.core_path.to_lowercase())
            || contains_fragment(&p, "core")
    }

    /// Path holds app-wide state units (`lib/core/cubits/...`).
    ///
    /// Intentionally broad: accepts a `cubit` or `cubits` directory under
    /// either the configured `core_path` or any `core` segment.
    #[must_use]
    pub fn is_global_cubit_path(&self, path: &Path) -> bool {
        let p = normalize(path);
        self.is_core_path(path)
            && (contains_fragment(&p, "cubits") || contains_fragment(&p, "cubit"))
    }

    /// Path holds repository contracts (`domain/repositories`).
    #[must_use]
    pub fn is_repository_interface_path(&self, path: &Path) -> bool {
        contains_fragment(&normalize(path), "domain/repositories")
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
