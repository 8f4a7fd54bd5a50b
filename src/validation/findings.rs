use super::{Rule, RuleTable, ValidationResult};
use crate::error::Result;

/// Builds findings, looking up severity and message from the rule
/// table. A lookup miss surfaces as a configuration error.
pub struct FindingFactory<'a> {
    rules: &'a RuleTable,
}

impl<'a> FindingFactory<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    pub fn finding(&self, rule: Rule) -> Result<ValidationResult> {
        let config = self.rules.get(rule)?;
        Ok(ValidationResult {
            rule,
            severity: config.severity,
            path: None,
            schema_ref: None,
            parameter_or_property: None,
            response_code: None,
            message: config.message.clone(),
        })
    }

    pub fn at_path(&self, rule: Rule, path: &str) -> Result<ValidationResult> {
        let mut result = self.finding(rule)?;
        result.path = Some(path.to_string());
        Ok(result)
    }

    pub fn for_parameter(&self, rule: Rule, path: &str, parameter: &str) -> Result<ValidationResult> {
        let mut result = self.at_path(rule, path)?;
        result.parameter_or_property = Some(parameter.to_string());
        Ok(result)
    }

    pub fn for_property(
        &self,
        rule: Rule,
        path: &str,
        schema_ref: Option<&str>,
        property: Option<&str>,
    ) -> Result<ValidationResult> {
        let mut result = self.at_path(rule, path)?;
        result.schema_ref = schema_ref.map(str::to_string);
        result.parameter_or_property = property.map(str::to_string);
        Ok(result)
    }

    pub fn for_response(&self, rule: Rule, path: &str, response_code: &str) -> Result<ValidationResult> {
        let mut result = self.at_path(rule, path)?;
        result.response_code = Some(response_code.to_string());
        Ok(result)
    }
}
