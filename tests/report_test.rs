use oasreport::loader::load_document;
use oasreport::report::ReportBuilder;
use std::path::Path;

fn build_fixture_report() -> oasreport::models::report::OpenApiReport {
    let document = load_document(Path::new("tests/fixtures/petstore.json")).unwrap();
    ReportBuilder::new(&document).build().unwrap()
}

#[test]
fn test_report_header_from_info() {
    let report = build_fixture_report();
    assert_eq!(report.title.as_deref(), Some("Pet Store API"));
    assert_eq!(report.description.as_deref(), Some("CRUD API for pets"));
    assert_eq!(report.author.as_deref(), Some("API Team"));
    assert_eq!(report.email.as_deref(), Some("api-team@example.com"));
}

#[test]
fn test_methods_are_flattened_per_path() {
    let report = build_fixture_report();
    assert_eq!(report.methods.len(), 2);

    let create = &report.methods[0];
    assert_eq!(create.request_type, "POST");
    assert_eq!(create.endpoint, "/pets");
    assert_eq!(create.summary.as_deref(), Some("Create pet"));

    let get = &report.methods[1];
    assert_eq!(get.request_type, "GET");
    assert_eq!(get.endpoint, "/pets/{petId}");
    assert_eq!(get.request_parameters.len(), 1);
    let pet_id = &get.request_parameters[0];
    assert_eq!(pet_id.name.as_deref(), Some("petId"));
    assert!(pet_id.required);
    assert_eq!(pet_id.location.as_deref(), Some("path"));
    assert_eq!(pet_id.example.as_deref(), Some("7"));
    let schema = pet_id.schema.as_ref().unwrap();
    assert_eq!(schema.schema_type.as_deref(), Some("integer"));
    assert_eq!(schema.maximum, Some(1000000.0));
}

#[test]
fn test_request_body_resolves_named_example_reference() {
    let report = build_fixture_report();
    let body = report.methods[0].request_body.as_ref().unwrap();
    assert_eq!(body.content_type.as_deref(), Some("application/json"));
    assert!(body.required);
    assert_eq!(
        body.schema.as_ref().unwrap().object_type_ref.as_deref(),
        Some("Dog")
    );
    let example = body.example.as_deref().unwrap();
    assert!(example.contains("\"name\": \"rex\""));
}

#[test]
fn test_responses_carry_first_content_type_only() {
    let report = build_fixture_report();
    let responses = &report.methods[1].api_responses;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].response_code, "200");
    assert_eq!(responses[0].content_type.as_deref(), Some("application/json"));
    assert!(responses[0].example.is_some());
    // A content-less response keeps its description but no content data.
    assert_eq!(responses[1].response_code, "404");
    assert!(responses[1].content_type.is_none());
    assert!(responses[1].example.is_none());
}

#[test]
fn test_component_inheritance_is_flattened() {
    let report = build_fixture_report();
    assert_eq!(report.components.len(), 4);

    let dog = report
        .components
        .iter()
        .find(|component| component.name == "Dog")
        .unwrap();
    let field_names: Vec<&str> = dog.fields.iter().map(|f| f.field_name.as_str()).collect();
    assert_eq!(field_names, vec!["id", "name", "breed"]);

    let breed = &dog.fields[2];
    assert!(breed.required);
    assert_eq!(breed.description.as_deref(), Some("Dog breed"));
    assert_eq!(breed.schema.max_length, Some(40));
}

#[test]
fn test_array_component_reports_items() {
    let report = build_fixture_report();
    let tags = report
        .components
        .iter()
        .find(|component| component.name == "Tags")
        .unwrap();
    let values = &tags.fields[0];
    assert_eq!(values.schema.schema_type.as_deref(), Some("array"));
    assert_eq!(values.schema.items_report.len(), 1);
    assert_eq!(
        values.schema.items_report[0].schema_type.as_deref(),
        Some("string")
    );
}

#[test]
fn test_security_schemes_flatten_present_grants_only() {
    let report = build_fixture_report();
    assert_eq!(report.security_schemes.len(), 2);

    let oauth = report
        .security_schemes
        .iter()
        .find(|scheme| scheme.name == "petstore_auth")
        .unwrap();
    assert_eq!(oauth.oauth2_flows.len(), 1);
    let flow = &oauth.oauth2_flows[0];
    assert_eq!(flow.grant_type, "password");
    assert_eq!(flow.scopes, vec!["pets:read", "pets:write"]);

    let api_key = report
        .security_schemes
        .iter()
        .find(|scheme| scheme.name == "api_key")
        .unwrap();
    assert!(api_key.oauth2_flows.is_empty());
    assert_eq!(api_key.location.as_deref(), Some("header"));
}

#[test]
fn test_operation_security_requirements() {
    let report = build_fixture_report();
    let security = &report.methods[0].security;
    assert_eq!(security.len(), 1);
    assert_eq!(security[0].name, "petstore_auth");
    assert_eq!(security[0].scopes, vec!["pets:write"]);
}

#[test]
fn test_report_building_is_idempotent() {
    let document = load_document(Path::new("tests/fixtures/petstore.json")).unwrap();
    let first = ReportBuilder::new(&document).build().unwrap();
    let second = ReportBuilder::new(&document).build().unwrap();
    assert_eq!(first, second);
}
