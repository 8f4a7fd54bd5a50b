use super::Rule;
use crate::models::openapi::Schema;

const STRING_TYPE: &str = "string";
const ARRAY_TYPE: &str = "array";
const BINARY_FORMAT: &str = "binary";
const NUMBER_TYPES: [&str; 2] = ["integer", "number"];

/// Rule identifiers for the constraint-completeness checks; the set
/// differs between parameter schemas and component property schemas.
pub struct ConstraintRules {
    pub maximum: Rule,
    pub minimum: Rule,
    pub max_length: Rule,
    pub max_items: Rule,
}

pub const PARAMETER_RULES: ConstraintRules = ConstraintRules {
    maximum: Rule::RequestParameterMaximumRequired,
    minimum: Rule::RequestParameterMinimumRequired,
    max_length: Rule::RequestParameterMaxLengthRequired,
    max_items: Rule::RequestParameterMaxItemsRequired,
};

pub const PROPERTY_RULES: ConstraintRules = ConstraintRules {
    maximum: Rule::SchemaPropertyMaximumRequired,
    minimum: Rule::SchemaPropertyMinimumRequired,
    max_length: Rule::SchemaPropertyMaxLengthRequired,
    max_items: Rule::SchemaPropertyMaxItemsRequired,
};

/// Which constraint-completeness rules fire for a schema: numeric types
/// must declare minimum and maximum, strings (except binary) a max
/// length, arrays a max item count. Each missing bound is its own rule.
pub fn missing_constraints(schema: &Schema, rules: &ConstraintRules) -> Vec<Rule> {
    let mut fired = Vec::new();
    let schema_type = schema.schema_type.as_deref().unwrap_or_default();
    if NUMBER_TYPES.contains(&schema_type) {
        if schema.maximum.is_none() {
            fired.push(rules.maximum);
        }
        if schema.minimum.is_none() {
            fired.push(rules.minimum);
        }
    }
    if schema_type == STRING_TYPE
        && schema.format.as_deref() != Some(BINARY_FORMAT)
        && schema.max_length.is_none()
    {
        fired.push(rules.max_length);
    }
    if schema_type == ARRAY_TYPE && schema.max_items.is_none() {
        fired.push(rules.max_items);
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(json: &str) -> Schema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_integer_without_bounds() {
        let fired = missing_constraints(&schema(r#"{"type": "integer"}"#), &PARAMETER_RULES);
        assert_eq!(
            fired,
            vec![
                Rule::RequestParameterMaximumRequired,
                Rule::RequestParameterMinimumRequired
            ]
        );
    }

    #[test]
    fn test_integer_with_bounds_passes() {
        let fired = missing_constraints(
            &schema(r#"{"type": "integer", "minimum": 0, "maximum": 100}"#),
            &PROPERTY_RULES,
        );
        assert!(fired.is_empty());
    }

    #[test]
    fn test_binary_string_is_exempt_from_max_length() {
        let fired = missing_constraints(
            &schema(r#"{"type": "string", "format": "binary"}"#),
            &PROPERTY_RULES,
        );
        assert!(fired.is_empty());
    }

    #[test]
    fn test_string_without_max_length() {
        let fired = missing_constraints(&schema(r#"{"type": "string"}"#), &PROPERTY_RULES);
        assert_eq!(fired, vec![Rule::SchemaPropertyMaxLengthRequired]);
    }

    #[test]
    fn test_array_without_max_items() {
        let fired = missing_constraints(
            &schema(r#"{"type": "array", "items": {"type": "string", "maxLength": 5}}"#),
            &PARAMETER_RULES,
        );
        assert_eq!(fired, vec![Rule::RequestParameterMaxItemsRequired]);
    }

    #[test]
    fn test_untyped_schema_has_no_constraint_findings() {
        let fired = missing_constraints(&Schema::default(), &PROPERTY_RULES);
        assert!(fired.is_empty());
    }
}
