//! Check command implementation.

use anyhow::{bail, Result};
use cma_lint_core::{Analyzer, SourceUnit};
use cma_lint_rules::all_rules;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// File suffix of host syntax dumps.
const DUMP_SUFFIX: &str = ".ast.json";

/// Runs the check command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;
    for message in config.validate() {
        tracing::warn!("Configuration: {message}");
    }

    let mut analyzer = Analyzer::builder().config(config).rules(all_rules()).build();

    if let Some(filter) = rules_filter {
        let ids: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        warn_unknown_rules(&analyzer, &ids);
        analyzer = analyzer.only(&ids);
    }

    let dumps = collect_dumps(paths);
    if dumps.is_empty() {
        bail!("No {DUMP_SUFFIX} files found");
    }
    let units = load_units(&dumps);

    tracing::info!(
        "Checking {} units with {} rules",
        units.len(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze(&units);

    super::output::print(&result, &units, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn warn_unknown_rules(analyzer: &Analyzer, ids: &[&str]) {
    for id in ids {
        let known = analyzer
            .rules()
            .any(|rule| rule.name() == *id || rule.code().eq_ignore_ascii_case(id));
        if !known {
            tracing::warn!("Unknown rule: {id}");
        }
    }
}

/// Expands files and directories into a sorted list of dump files.
///
/// Directory walks honour `.gitignore` and hidden-file rules.
fn collect_dumps(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut dumps = Vec::new();

    for path in paths {
        if path.is_file() {
            dumps.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            tracing::warn!("Path not found: {}", path.display());
            continue;
        }
        for entry in WalkBuilder::new(path).build() {
            match entry {
                Ok(entry) if is_dump(entry.path()) => dumps.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable entry: {e}"),
            }
        }
    }

    dumps.sort();
    dumps.dedup();
    dumps
}

fn is_dump(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(DUMP_SUFFIX))
}

/// Loads every dump; unreadable or malformed ones are skipped with a warning.
fn load_units(dumps: &[PathBuf]) -> Vec<SourceUnit> {
    dumps
        .iter()
        .filter_map(|path| match SourceUnit::from_file(path) {
            Ok(unit) => Some(unit),
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", path.display());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DUMP: &str = r#"{ "path": "lib/a.dart", "unit": {} }"#;

    #[test]
    fn collects_dumps_recursively_and_sorted() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("features/auth");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("b.ast.json"), DUMP).unwrap();
        fs::write(tmp.path().join("a.ast.json"), DUMP).unwrap();
        fs::write(tmp.path().join("notes.json"), "{}").unwrap();

        let dumps = collect_dumps(&[tmp.path().to_path_buf()]);
        assert_eq!(
            dumps,
            vec![tmp.path().join("a.ast.json"), nested.join("b.ast.json")]
        );
    }

    #[test]
    fn explicit_files_are_taken_as_is() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("unit.json");
        fs::write(&file, DUMP).unwrap();

        let dumps = collect_dumps(&[file.clone(), file.clone()]);
        assert_eq!(dumps, vec![file]);
    }

    #[test]
    fn malformed_dumps_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.ast.json");
        let bad = tmp.path().join("bad.ast.json");
        fs::write(&good, DUMP).unwrap();
        fs::write(&bad, "{ not json").unwrap();

        let units = load_units(&[bad, good]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].path, PathBuf::from("lib/a.dart"));
    }
}
