use super::constraints::{self, PARAMETER_RULES};
use super::schemas::validate_property;
use super::{example_missing, is_missing, FindingFactory, Rule, ValidationResult};
use crate::error::{OasError, Result};
use crate::models::openapi::{OpenApiDocument, Operation, Parameter};

/// Operation-level checks for every path: description and summary
/// presence, parameter documentation and constraint completeness,
/// request body example and inline property quality, and response
/// documentation.
pub fn validate_paths(
    document: &OpenApiDocument,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let mut results = Vec::new();
    for (path, path_item) in &document.paths {
        let (_, operation) = path_item
            .operation()
            .ok_or_else(|| OasError::OperationNotSpecified { path: path.clone() })?;
        results.extend(validate_operation(path, operation, findings)?);
        results.extend(validate_request_body(path, operation, findings)?);
        results.extend(validate_responses(path, operation, findings)?);
    }
    Ok(results)
}

fn validate_operation(
    path: &str,
    operation: &Operation,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let mut results = Vec::new();
    if is_missing(operation.description.as_deref()) {
        results.push(findings.at_path(Rule::ApiOperationDescriptionRequired, path)?);
    }
    if is_missing(operation.summary.as_deref()) {
        results.push(findings.at_path(Rule::ApiOperationSummaryRequired, path)?);
    }
    for parameter in &operation.parameters {
        results.extend(validate_parameter(path, parameter, findings)?);
    }
    Ok(results)
}

fn validate_parameter(
    path: &str,
    parameter: &Parameter,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let name = parameter.name.as_deref().unwrap_or_default();
    let mut results = Vec::new();
    if is_missing(parameter.description.as_deref()) {
        results.push(findings.for_parameter(Rule::RequestParameterDescriptionRequired, path, name)?);
    }
    if example_missing(parameter.example.as_ref()) {
        results.push(findings.for_parameter(Rule::RequestParameterExampleRequired, path, name)?);
    }
    if let Some(schema) = parameter.schema.as_ref() {
        for rule in constraints::missing_constraints(schema, &PARAMETER_RULES) {
            results.push(findings.for_parameter(rule, path, name)?);
        }
    }
    Ok(results)
}

fn validate_request_body(
    path: &str,
    operation: &Operation,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let mut results = Vec::new();
    let request_body = match operation.request_body.as_ref() {
        Some(request_body) => request_body,
        None => return Ok(results),
    };
    // Only the first declared media type carries the body contract.
    if let Some((_, media_type)) = request_body.content.first() {
        if let Some(schema) = media_type.schema.as_ref() {
            for (field_name, field_schema) in &schema.properties {
                results.extend(validate_property(path, field_name, field_schema, findings)?);
            }
        }
        // The example is required whether or not a schema is declared.
        if example_missing(media_type.example.as_ref()) {
            results.push(findings.for_property(
                Rule::RequestBodyExampleRequired,
                path,
                media_type
                    .schema
                    .as_ref()
                    .and_then(|schema| schema.reference.as_deref()),
                None,
            )?);
        }
    }
    Ok(results)
}

fn validate_responses(
    path: &str,
    operation: &Operation,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let mut results = Vec::new();
    for (code, response) in &operation.responses {
        // Content-less responses are exempt from the description and
        // example checks.
        let media_type = match response.content.first() {
            Some((_, media_type)) => media_type,
            None => continue,
        };
        if is_missing(response.description.as_deref()) {
            results.push(findings.for_response(Rule::ApiResponseDescriptionRequired, path, code)?);
        }
        if example_missing(media_type.example.as_ref()) {
            results.push(findings.for_response(Rule::ApiResponseExampleRequired, path, code)?);
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RuleTable;

    fn run(document_json: &str) -> Vec<ValidationResult> {
        let document: OpenApiDocument = serde_json::from_str(document_json).unwrap();
        let rules = RuleTable::bundled().unwrap();
        let findings = FindingFactory::new(&rules);
        validate_paths(&document, &findings).unwrap()
    }

    #[test]
    fn test_integer_parameter_missing_maximum_yields_single_finding() {
        let results = run(
            r##"{
                "paths": {
                    "/pets": {
                        "get": {
                            "summary": "List pets",
                            "description": "Lists pets",
                            "parameters": [
                                {
                                    "name": "limit",
                                    "in": "query",
                                    "description": "Page size",
                                    "example": 10,
                                    "schema": {"type": "integer", "minimum": 1}
                                }
                            ]
                        }
                    }
                }
            }"##,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rule, Rule::RequestParameterMaximumRequired);
        assert_eq!(results[0].path.as_deref(), Some("/pets"));
        assert_eq!(results[0].parameter_or_property.as_deref(), Some("limit"));
    }

    #[test]
    fn test_undocumented_operation() {
        let results = run(
            r##"{
                "paths": {
                    "/pets": {"get": {}}
                }
            }"##,
        );
        let rules: Vec<Rule> = results.iter().map(|r| r.rule).collect();
        assert_eq!(
            rules,
            vec![
                Rule::ApiOperationDescriptionRequired,
                Rule::ApiOperationSummaryRequired
            ]
        );
    }

    #[test]
    fn test_path_without_operation_is_fatal() {
        let document: OpenApiDocument = serde_json::from_str(
            r##"{"paths": {"/broken": {"description": "nothing declared"}}}"##,
        )
        .unwrap();
        let rules = RuleTable::bundled().unwrap();
        let findings = FindingFactory::new(&rules);
        let error = validate_paths(&document, &findings).unwrap_err();
        match error {
            OasError::OperationNotSpecified { path } => assert_eq!(path, "/broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_content_less_response_is_exempt() {
        let results = run(
            r##"{
                "paths": {
                    "/pets": {
                        "delete": {
                            "summary": "Delete",
                            "description": "Deletes",
                            "responses": {
                                "204": {}
                            }
                        }
                    }
                }
            }"##,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_response_with_content_requires_description_and_example() {
        let results = run(
            r##"{
                "paths": {
                    "/pets": {
                        "get": {
                            "summary": "List",
                            "description": "Lists",
                            "responses": {
                                "200": {
                                    "content": {
                                        "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
                                    }
                                }
                            }
                        }
                    }
                }
            }"##,
        );
        let rules: Vec<Rule> = results.iter().map(|r| r.rule).collect();
        assert_eq!(
            rules,
            vec![
                Rule::ApiResponseDescriptionRequired,
                Rule::ApiResponseExampleRequired
            ]
        );
        assert_eq!(results[0].response_code.as_deref(), Some("200"));
    }

    #[test]
    fn test_request_body_without_example() {
        let results = run(
            r##"{
                "paths": {
                    "/pets": {
                        "post": {
                            "summary": "Create",
                            "description": "Creates",
                            "requestBody": {
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Pet"}
                                    }
                                }
                            }
                        }
                    }
                }
            }"##,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rule, Rule::RequestBodyExampleRequired);
        assert_eq!(
            results[0].schema_ref.as_deref(),
            Some("#/components/schemas/Pet")
        );
    }

    #[test]
    fn test_request_body_without_schema_still_requires_example() {
        let results = run(
            r##"{
                "paths": {
                    "/pets": {
                        "post": {
                            "summary": "Create",
                            "description": "Creates",
                            "requestBody": {
                                "content": {
                                    "application/json": {}
                                }
                            }
                        }
                    }
                }
            }"##,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rule, Rule::RequestBodyExampleRequired);
        assert_eq!(results[0].path.as_deref(), Some("/pets"));
        assert!(results[0].schema_ref.is_none());
    }
}
