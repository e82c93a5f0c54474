//! List rules command implementation.

use cma_lint_core::{Analyzer, Configuration};
use cma_lint_rules::all_rules;

/// Runs the list-rules command.
///
/// The severity column shows what the project configuration resolves each
/// rule to.
pub fn run(config: &Configuration) {
    let analyzer = Analyzer::builder()
        .config(config.clone())
        .rules(all_rules())
        .build();

    println!("Available rules:\n");
    println!(
        "{:<8} {:<38} {:<9} Description",
        "Code", "Name", "Severity"
    );
    println!("{}", "-".repeat(110));

    for rule in analyzer.rules() {
        println!(
            "{:<8} {:<38} {:<9} {}",
            rule.code(),
            rule.name(),
            analyzer.effective_severity(rule).to_string(),
            rule.description()
        );
    }

    println!("\nOverride severities in clean_modular_architecture.yaml:");
    println!("  clean_modular_architecture:");
    println!("    lint:");
    println!("      severity:");
    println!("        entity_no_getters: error");
    println!("        bloc_naming_convention: ignore");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  cma-lint check --rules entity_no_copywith,domain_no_data_imports");
    println!("  cma-lint check --rules CMA001,CMA010");
}
