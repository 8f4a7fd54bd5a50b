use crate::loader;
use crate::report::ReportBuilder;
use crate::{OasError, Result};
use colored::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One remote report request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Service base URL; the standard api-docs path is appended
    pub url: String,
    /// Requested report file name, without extension
    pub report_file_name: String,
}

pub async fn execute_batch(requests_path: &Path, output_dir: &Path, insecure: bool) -> Result<()> {
    let content = fs::read_to_string(requests_path)?;
    let requests: Vec<ReportRequest> = serde_json::from_str(&content)?;
    tracing::info!("Starting to read [{}] open api docs", requests.len());

    // Fail fast: the first fetch failure fails the whole batch.
    let fetches = requests
        .iter()
        .map(|request| loader::fetch_document(&request.url, insecure));
    let documents = futures::future::try_join_all(fetches).await?;
    tracing::info!("[{}] open apis has been read", documents.len());

    // Report builds are independent per document and run in parallel.
    let builds = documents.into_iter().map(|document| {
        tokio::task::spawn_blocking(move || ReportBuilder::new(&document).build())
    });
    let reports = futures::future::try_join_all(builds)
        .await
        .map_err(|err| OasError::Internal(format!("report build task failed: {err}")))?
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(output_dir)?;
    let mut seen_names: HashMap<String, usize> = HashMap::new();
    for (request, report) in requests.iter().zip(&reports) {
        let file_name = unique_file_name(&request.report_file_name, &mut seen_names);
        let target = output_dir.join(&file_name);
        fs::write(&target, serde_json::to_string_pretty(report)?)?;
        println!("{} {} -> {}", "✓".green(), request.url, target.display());
    }
    println!(
        "{}",
        format!("✓ {} reports written to {}", reports.len(), output_dir.display())
            .green()
            .bold()
    );
    Ok(())
}

/// Requested names may collide; later duplicates get an incrementing
/// suffix.
fn unique_file_name(base: &str, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(base.to_string()).or_insert(0);
    *count += 1;
    if *count == 1 {
        format!("{base}.json")
    } else {
        format!("{}-{}.json", base, *count - 1)
    }
}
