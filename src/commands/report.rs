use crate::loader;
use crate::report::ReportBuilder;
use crate::Result;
use colored::*;
use std::fs;
use std::path::Path;

pub fn execute_report(input: &Path, output: Option<&Path>) -> Result<()> {
    let document = loader::load_document(input)?;
    let report = ReportBuilder::new(&document).build()?;
    let json = serde_json::to_string_pretty(&report)?;

    match output {
        Some(output) => {
            fs::write(output, json)?;
            println!(
                "{} Report [{}] written to {}",
                "✓".green(),
                report.title.as_deref().unwrap_or("untitled").bold(),
                output.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
