use super::constraints::{self, PROPERTY_RULES};
use super::{example_missing, is_missing, FindingFactory, Rule, ValidationResult};
use crate::error::Result;
use crate::models::openapi::{OpenApiDocument, Schema};

/// Component-level checks: every property of every named schema must be
/// documented, carry an example, and declare its upper bounds.
pub fn validate_components(
    document: &OpenApiDocument,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let schemas = match document.schemas() {
        Some(schemas) => schemas,
        None => return Ok(Vec::new()),
    };
    let mut results = Vec::new();
    for (name, schema) in schemas {
        for (field_name, field_schema) in &schema.properties {
            results.extend(validate_property(name, field_name, field_schema, findings)?);
        }
    }
    Ok(results)
}

/// Full quality check for one named property: the constraint set plus
/// description and example presence. Shared by the component walk and
/// the request body walk; `context` is the component name or endpoint
/// path the finding is keyed by.
pub(super) fn validate_property(
    context: &str,
    field_name: &str,
    schema: &Schema,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let mut results = Vec::new();
    for rule in constraints::missing_constraints(schema, &PROPERTY_RULES) {
        results.push(findings.for_property(
            rule,
            context,
            schema.reference.as_deref(),
            Some(field_name),
        )?);
    }
    if is_missing(schema.description.as_deref()) {
        results.push(findings.for_property(
            Rule::SchemaPropertyDescriptionRequired,
            context,
            schema.reference.as_deref(),
            Some(field_name),
        )?);
    }
    if example_missing(schema.example.as_ref()) {
        results.push(findings.for_property(
            Rule::SchemaPropertyExampleRequired,
            context,
            schema.reference.as_deref(),
            Some(field_name),
        )?);
    }
    Ok(results)
}
