//! Units under analysis and the per-file rule context.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classifier::{ClassRole, Classifier};
use crate::config::Configuration;
use crate::syntax::{ClassDecl, CompilationUnit};
use crate::utils::paths::{file_name, normalize};

/// One compilation unit handed over by the host.
///
/// On disk this is the `*.ast.json` dump format:
///
/// ```json
/// { "path": "lib/features/auth/domain/entities/user.dart",
///   "unit": { "directives": [], "declarations": [] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Source file path as the host reports it.
    pub path: PathBuf,
    /// Parsed syntax tree.
    pub unit: CompilationUnit,
    /// Source text, used for pretty rendering only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SourceUnit {
    /// Creates a unit without source text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, unit: CompilationUnit) -> Self {
        Self {
            path: path.into(),
            unit,
            content: None,
        }
    }

    /// Parses a unit from its JSON dump.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a unit.
    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        serde_json::from_str(json).map_err(|e| UnitError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads a unit from a `*.ast.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, UnitError> {
        let content = std::fs::read_to_string(path).map_err(|e| UnitError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| UnitError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Returns true for code-generator output (`*.g.dart`, `*.freezed.dart`, ...).
    #[must_use]
    pub fn is_generated(&self) -> bool {
        let normalized = normalize(&self.path);
        let name = file_name(&normalized);
        GENERATED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
    }
}

const GENERATED_SUFFIXES: &[&str] = &[
    ".g.dart",
    ".freezed.dart",
    ".config.dart",
    ".gr.dart",
    ".mocks.dart",
];

/// Errors loading a [`SourceUnit`].
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    /// IO error reading the dump.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The dump is not a valid unit.
    #[error("Invalid syntax dump: {message}")]
    Parse {
        /// Dump path, when loaded from disk.
        path: Option<PathBuf>,
        /// Parse error message.
        message: String,
    },
}

/// Context provided to rules for one unit.
///
/// Bundles the path (raw and normalized) with the shared configuration and
/// a classifier bound to it.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path as supplied by the host.
    pub path: &'a Path,
    /// Lowercased, forward-slash, leading-slash form of `path`.
    pub normalized: String,
    /// Project configuration.
    pub config: &'a Configuration,
    /// Role classifier.
    pub classifier: Classifier<'a>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, config: &'a Configuration) -> Self {
        Self {
            path,
            normalized: normalize(path),
            config,
            classifier: Classifier::new(config),
        }
    }

    /// File name component of the normalized path.
    #[must_use]
    pub fn file_name(&self) -> &str {
        file_name(&self.normalized)
    }

    /// Role of a class declared in this file.
    #[must_use]
    pub fn role(&self, class: &ClassDecl) -> ClassRole {
        self.classifier.classify(class, self.path)
    }
}
