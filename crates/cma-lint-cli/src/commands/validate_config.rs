//! Validate-config command implementation.

use anyhow::Result;

use crate::config_resolver::ConfigSource;

/// Runs the validate-config command.
///
/// Prints every validation message and exits with status 1 if there are any.
pub fn run(source: &ConfigSource) -> Result<()> {
    let config = match source.path() {
        Some(path) => {
            println!("Validating {}", path.display());
            cma_lint_core::Configuration::from_file(path)?
        }
        None => {
            println!("No configuration file found; checking defaults");
            source.load()?
        }
    };

    let messages = config.validate();
    if messages.is_empty() {
        println!("\x1b[32mConfiguration is valid\x1b[0m");
        return Ok(());
    }

    for message in &messages {
        println!("  \x1b[31merror\x1b[0m: {message}");
    }
    println!("Found {} configuration error(s)", messages.len());
    std::process::exit(1);
}
