use crate::loader;
use crate::validation::{OpenApiValidator, RuleTable, Severity};
use crate::Result;
use colored::*;
use std::path::Path;

pub fn execute_validate(input: &Path, rules_path: Option<&Path>, json: bool) -> Result<()> {
    let rules = match rules_path {
        Some(path) => RuleTable::from_path(path)?,
        None => RuleTable::bundled()?,
    };
    let document = loader::load_document(input)?;
    let report = OpenApiValidator::new(&document, &rules).validate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.results)?);
        return Ok(());
    }

    println!("{}", "Validating OpenAPI document...".bright_blue());
    println!("  Path: {}", input.display());
    if let Some(title) = document.title() {
        println!("  Title: {}", title.bold());
    }
    println!();

    if report.results.is_empty() {
        println!("{}", "✓ No findings".green().bold());
        return Ok(());
    }

    for result in &report.results {
        let severity = match result.severity {
            Severity::Critical => result.severity.to_string().red().bold(),
            Severity::Major => result.severity.to_string().red(),
            Severity::Minor => result.severity.to_string().yellow(),
            Severity::Info => result.severity.to_string().bright_blue(),
        };
        println!("  {:<8} {} {}", severity, result.rule.to_string().bold(), result.format());
    }

    let totals = report.totals();
    println!();
    println!(
        "{} findings: {} critical, {} major, {} minor, {} info",
        totals.total.to_string().bold(),
        totals.critical,
        totals.major,
        totals.minor,
        totals.info
    );
    Ok(())
}
