use super::{is_missing, FindingFactory, Rule, ValidationResult};
use crate::error::Result;
use crate::models::openapi::OpenApiDocument;

/// Document-level checks: title, version, description and contact data.
pub fn validate_info(
    document: &OpenApiDocument,
    findings: &FindingFactory<'_>,
) -> Result<Vec<ValidationResult>> {
    let mut results = Vec::new();
    let info = document.info.as_ref();
    let contact = info.and_then(|info| info.contact.as_ref());

    if is_missing(info.and_then(|info| info.title.as_deref())) {
        results.push(findings.finding(Rule::ApiTitleRequired)?);
    }
    if is_missing(info.and_then(|info| info.version.as_deref())) {
        results.push(findings.finding(Rule::ApiVersionRequired)?);
    }
    if is_missing(info.and_then(|info| info.description.as_deref())) {
        results.push(findings.finding(Rule::ApiDescriptionRequired)?);
    }
    if is_missing(contact.and_then(|contact| contact.name.as_deref())) {
        results.push(findings.finding(Rule::ApiContactNameRequired)?);
    }
    if is_missing(contact.and_then(|contact| contact.email.as_deref())) {
        results.push(findings.finding(Rule::ApiContactEmailRequired)?);
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
        validate_info(&document, &findings).unwrap()
    }

    #[test]
    fn test_complete_info_yields_no_findings() {
        let results = run(
            r#"{
                "info": {
                    "title": "Pets",
                    "version": "1.0",
                    "description": "Pet store",
                    "contact": {"name": "api team", "email": "api@example.com"}
                }
            }"#,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_contact_yields_name_and_email_findings() {
        let results = run(
            r#"{
                "info": {
                    "title": "Pets",
                    "version": "1.0",
                    "description": "Pet store"
                }
            }"#,
        );
        let rules: Vec<Rule> = results.iter().map(|r| r.rule).collect();
        assert_eq!(
            rules,
            vec![Rule::ApiContactNameRequired, Rule::ApiContactEmailRequired]
        );
    }

    #[test]
    fn test_absent_info_fires_all_document_rules() {
        let results = run("{}");
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let results = run(r#"{"info": {"title": "", "version": "1.0"}}"#);
        assert!(results.iter().any(|r| r.rule == Rule::ApiTitleRequired));
        assert!(!results.iter().any(|r| r.rule == Rule::ApiVersionRequired));
    }
}
