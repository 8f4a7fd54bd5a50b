mod constraints;
mod document;
mod findings;
mod operations;
pub mod rules;
mod schemas;

pub use findings::FindingFactory;
pub use rules::{RuleConfig, RuleTable};

use crate::error::Result;
use crate::models::openapi::OpenApiDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validation rules checked against a document. The full catalogue is
/// the configuration contract; the engine dispatches a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rule {
    ApiTitleRequired,
    ApiDescriptionRequired,
    ApiVersionRequired,
    ApiContactNameRequired,
    ApiContactEmailRequired,
    ApiOperationDescriptionRequired,
    ApiOperationSummaryRequired,
    RequestBodyExampleRequired,
    RequestParameterDescriptionRequired,
    RequestParameterExampleRequired,
    RequestParameterMaxLengthRequired,
    RequestParameterMinimumRequired,
    RequestParameterMaximumRequired,
    RequestParameterMaxItemsRequired,
    SchemaDescriptionRequired,
    SchemaPropertyMaxLengthRequired,
    SchemaPropertyMinimumRequired,
    SchemaPropertyMaximumRequired,
    SchemaPropertyDescriptionRequired,
    SchemaPropertyMaxItemsRequired,
    SchemaPropertyExampleRequired,
    ApiResponseDescriptionRequired,
    ApiResponseExampleRequired,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::ApiTitleRequired => "API_TITLE_REQUIRED",
            Rule::ApiDescriptionRequired => "API_DESCRIPTION_REQUIRED",
            Rule::ApiVersionRequired => "API_VERSION_REQUIRED",
            Rule::ApiContactNameRequired => "API_CONTACT_NAME_REQUIRED",
            Rule::ApiContactEmailRequired => "API_CONTACT_EMAIL_REQUIRED",
            Rule::ApiOperationDescriptionRequired => "API_OPERATION_DESCRIPTION_REQUIRED",
            Rule::ApiOperationSummaryRequired => "API_OPERATION_SUMMARY_REQUIRED",
            Rule::RequestBodyExampleRequired => "REQUEST_BODY_EXAMPLE_REQUIRED",
            Rule::RequestParameterDescriptionRequired => "REQUEST_PARAMETER_DESCRIPTION_REQUIRED",
            Rule::RequestParameterExampleRequired => "REQUEST_PARAMETER_EXAMPLE_REQUIRED",
            Rule::RequestParameterMaxLengthRequired => "REQUEST_PARAMETER_MAX_LENGTH_REQUIRED",
            Rule::RequestParameterMinimumRequired => "REQUEST_PARAMETER_MINIMUM_REQUIRED",
            Rule::RequestParameterMaximumRequired => "REQUEST_PARAMETER_MAXIMUM_REQUIRED",
            Rule::RequestParameterMaxItemsRequired => "REQUEST_PARAMETER_MAX_ITEMS_REQUIRED",
            Rule::SchemaDescriptionRequired => "SCHEMA_DESCRIPTION_REQUIRED",
            Rule::SchemaPropertyMaxLengthRequired => "SCHEMA_PROPERTY_MAX_LENGTH_REQUIRED",
            Rule::SchemaPropertyMinimumRequired => "SCHEMA_PROPERTY_MINIMUM_REQUIRED",
            Rule::SchemaPropertyMaximumRequired => "SCHEMA_PROPERTY_MAXIMUM_REQUIRED",
            Rule::SchemaPropertyDescriptionRequired => "SCHEMA_PROPERTY_DESCRIPTION_REQUIRED",
            Rule::SchemaPropertyMaxItemsRequired => "SCHEMA_PROPERTY_MAX_ITEMS_REQUIRED",
            Rule::SchemaPropertyExampleRequired => "SCHEMA_PROPERTY_EXAMPLE_REQUIRED",
            Rule::ApiResponseDescriptionRequired => "API_RESPONSE_DESCRIPTION_REQUIRED",
            Rule::ApiResponseExampleRequired => "API_RESPONSE_EXAMPLE_REQUIRED",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity levels in declaration order; sorting ascending puts
/// critical findings first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Critical => "CRITICAL",
            Severity::Major => "MAJOR",
            Severity::Minor => "MINOR",
            Severity::Info => "INFO",
        };
        f.write_str(name)
    }
}

/// One validation finding. Findings are the expected output of a
/// successful run, never errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub rule: Rule,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_or_property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    pub message: String,
}

impl ValidationResult {
    /// Formats the finding with its context for terminal display.
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if let Some(path) = &self.path {
            parts.push(format!("[endpoint: {}]", path));
        }
        if let Some(schema_ref) = &self.schema_ref {
            parts.push(format!("[schema: {}]", schema_ref));
        }
        if let Some(name) = &self.parameter_or_property {
            parts.push(format!("[property: {}]", name));
        }
        if let Some(code) = &self.response_code {
            parts.push(format!("[response: {}]", code));
        }
        parts.push(self.message.clone());
        parts.join(" ")
    }
}

/// Aggregate per-severity counts, the second record shape handed to the
/// reporting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityTotals {
    pub total: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub info: usize,
}

/// Ordered, severity-sorted validation findings.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn count_by(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|result| result.severity == severity)
            .count()
    }

    pub fn totals(&self) -> SeverityTotals {
        SeverityTotals {
            total: self.results.len(),
            critical: self.count_by(Severity::Critical),
            major: self.count_by(Severity::Major),
            minor: self.count_by(Severity::Minor),
            info: self.count_by(Severity::Info),
        }
    }
}

/// Rule engine entry point. Evaluates the fixed check catalogue against
/// a document; severities and messages come from the rule table.
pub struct OpenApiValidator<'a> {
    document: &'a OpenApiDocument,
    findings: FindingFactory<'a>,
}

impl<'a> OpenApiValidator<'a> {
    pub fn new(document: &'a OpenApiDocument, rules: &'a RuleTable) -> Self {
        Self {
            document,
            findings: FindingFactory::new(rules),
        }
    }

    pub fn validate(&self) -> Result<ValidationReport> {
        let title = self.document.title();
        tracing::info!("Starting to validate open api [{:?}]", title);

        let mut results = Vec::new();
        results.extend(document::validate_info(self.document, &self.findings)?);
        results.extend(operations::validate_paths(self.document, &self.findings)?);
        results.extend(schemas::validate_components(self.document, &self.findings)?);

        // Stable sort: ties keep discovery order.
        results.sort_by_key(|result| result.severity);

        let report = ValidationReport { results };
        let totals = report.totals();
        tracing::info!(
            "Open api [{:?}] validation has been finished: {} findings ({} critical, {} major, {} minor, {} info)",
            title,
            totals.total,
            totals.critical,
            totals.major,
            totals.minor,
            totals.info
        );
        Ok(report)
    }
}

/// Text fields the checks treat as absent when missing or empty.
pub(crate) fn is_missing(text: Option<&str>) -> bool {
    text.is_none_or(|text| text.is_empty())
}

/// Example values are required to be non-empty.
pub(crate) fn example_missing(example: Option<&Value>) -> bool {
    match example {
        None => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}
