//! Shared output formatting for lint results.

use anyhow::Result;
use cma_lint_core::{Diagnostic, LintResult, RenderedDiagnostic, Severity, SourceUnit};
use miette::{NamedSource, Report};
use std::collections::HashMap;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `units` supplies source text for the pretty format; diagnostics on units
/// without text fall back to the plain layout.
pub fn print(result: &LintResult, units: &[SourceUnit], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, units),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
        Severity::Ignore => "ignore",
    }
}

fn print_plain(diagnostic: &Diagnostic) {
    println!(
        "{} {} at {}:{}:{}",
        diagnostic.code,
        diagnostic.rule,
        diagnostic.location.file.display(),
        diagnostic.location.line,
        diagnostic.location.column,
    );
    println!(
        "  {}: {}",
        severity_indicator(diagnostic.severity),
        diagnostic.message
    );
    if let Some(correction) = &diagnostic.correction {
        println!("  = help: {correction}");
    }
    println!();
}

fn print_text(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        print_plain(diagnostic);
    }
    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!(
            "{}:{}:{}: {} [{}] {}",
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.severity,
            diagnostic.code,
            diagnostic.message,
        );
    }
}

fn print_pretty(result: &LintResult, units: &[SourceUnit]) {
    let sources: HashMap<&Path, &str> = units
        .iter()
        .filter_map(|u| u.content.as_deref().map(|c| (u.path.as_path(), c)))
        .collect();

    for diagnostic in &result.diagnostics {
        match sources.get(diagnostic.location.file.as_path()) {
            Some(content) if diagnostic.location.length > 0 => {
                let name = diagnostic.location.file.display().to_string();
                let report = Report::new(RenderedDiagnostic::from(diagnostic))
                    .with_source_code(NamedSource::new(name, (*content).to_string()));
                println!("{} {report:?}", diagnostic.code);
            }
            _ => print_plain(diagnostic),
        }
    }
    print_summary(result);
}
