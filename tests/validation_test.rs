use oasreport::loader::load_document;
use oasreport::models::openapi::OpenApiDocument;
use oasreport::validation::{OpenApiValidator, Rule, RuleTable, Severity};
use std::path::Path;

#[test]
fn test_fixture_yields_only_the_request_body_example_finding() {
    let document = load_document(Path::new("tests/fixtures/petstore.json")).unwrap();
    let rules = RuleTable::bundled().unwrap();
    let report = OpenApiValidator::new(&document, &rules).validate().unwrap();

    assert_eq!(report.results.len(), 1);
    let finding = &report.results[0];
    assert_eq!(finding.rule, Rule::RequestBodyExampleRequired);
    assert_eq!(finding.path.as_deref(), Some("/pets"));
    assert_eq!(
        finding.schema_ref.as_deref(),
        Some("#/components/schemas/Dog")
    );

    let totals = report.totals();
    assert_eq!(totals.total, 1);
    assert_eq!(totals.minor, 1);
    assert_eq!(totals.critical + totals.major + totals.info, 0);
}

#[test]
fn test_findings_are_sorted_by_severity() {
    // Discovery order is description (INFO), contact name (CRITICAL),
    // contact email (MAJOR); the sorted output leads with CRITICAL.
    let document: OpenApiDocument = serde_json::from_str(
        r#"{
            "info": {"title": "Pets", "version": "1.0"}
        }"#,
    )
    .unwrap();
    let rules = RuleTable::from_path(Path::new("tests/fixtures/rules-ordering.json")).unwrap();
    let report = OpenApiValidator::new(&document, &rules).validate().unwrap();

    let severities: Vec<Severity> = report.results.iter().map(|r| r.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Critical, Severity::Major, Severity::Info]
    );
    let rules_fired: Vec<Rule> = report.results.iter().map(|r| r.rule).collect();
    assert_eq!(
        rules_fired,
        vec![
            Rule::ApiContactNameRequired,
            Rule::ApiContactEmailRequired,
            Rule::ApiDescriptionRequired
        ]
    );
}

#[test]
fn test_findings_serialize_for_the_reporting_collaborator() {
    let document: OpenApiDocument = serde_json::from_str("{}").unwrap();
    let rules = RuleTable::bundled().unwrap();
    let report = OpenApiValidator::new(&document, &rules).validate().unwrap();
    assert_eq!(report.results.len(), 5);

    let rows = serde_json::to_value(&report.results).unwrap();
    let first = &rows[0];
    assert_eq!(first["rule"], "API_TITLE_REQUIRED");
    assert_eq!(first["severity"], "CRITICAL");
    assert!(first["message"].as_str().unwrap().len() > 0);
}

#[test]
fn test_validation_is_pure_over_the_document() {
    let document = load_document(Path::new("tests/fixtures/petstore.json")).unwrap();
    let rules = RuleTable::bundled().unwrap();
    let first = OpenApiValidator::new(&document, &rules).validate().unwrap();
    let second = OpenApiValidator::new(&document, &rules).validate().unwrap();
    assert_eq!(first, second);
}
