//! Configuration file resolution.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/clean_modular_architecture.yaml` or `analysis_options.yaml`
//! 3. No config found → defaults

use anyhow::{Context, Result};
use cma_lint_core::Configuration;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// An explicit file must load. A broken project file is reported and
    /// replaced by the defaults, so analysis still runs.
    pub fn load(&self) -> Result<Configuration> {
        match self {
            Self::Explicit(p) => Configuration::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display())),
            Self::Project(p) => Ok(Configuration::from_file(p).unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {e}", p.display());
                Configuration::default()
            })),
            Self::Default => Ok(Configuration::default()),
        }
    }
}

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    match Configuration::discover(project_dir) {
        Some(candidate) => {
            tracing::debug!("Found project config: {}", candidate.display());
            ConfigSource::Project(candidate)
        }
        None => ConfigSource::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.yaml");
        fs::write(&explicit, "").unwrap();

        let project = tmp.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("clean_modular_architecture.yaml"), "").unwrap();

        let result = resolve(&project, Some(&explicit));
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn explicit_does_not_check_existence() {
        let result = resolve(Path::new("/tmp"), Some(Path::new("/nonexistent.yaml")));
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.yaml"))
        );
    }

    #[test]
    fn dedicated_file_preferred_over_analysis_options() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("clean_modular_architecture.yaml"), "").unwrap();
        fs::write(tmp.path().join("analysis_options.yaml"), "").unwrap();

        let result = resolve(tmp.path(), None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("clean_modular_architecture.yaml"))
        );
    }

    #[test]
    fn analysis_options_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("analysis_options.yaml"), "").unwrap();

        let result = resolve(tmp.path(), None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("analysis_options.yaml"))
        );
    }

    #[test]
    fn no_config_returns_default() {
        let project = TempDir::new().unwrap();
        assert_eq!(resolve(project.path(), None), ConfigSource::Default);
        assert!(ConfigSource::Default.path().is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let source = ConfigSource::Explicit(PathBuf::from("/nonexistent/cma.yaml"));
        assert!(source.load().is_err());
    }

    #[test]
    fn broken_project_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean_modular_architecture.yaml");
        fs::write(&path, "clean_modular_architecture: [unclosed").unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn project_file_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean_modular_architecture.yaml");
        fs::write(
            &path,
            "clean_modular_architecture:\n  naming:\n    bloc_suffix: Store\n",
        )
        .unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert_eq!(config.naming.bloc_suffix, "Store");
    }
}
