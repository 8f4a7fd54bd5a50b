use crate::models::openapi::{Components, Example, Schema};

/// Local component references are resolved by their trailing path
/// segment only: `#/components/schemas/Pet` -> `Pet`. Deeper pointer
/// chains are the caller's concern.
pub fn local_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Resolves a schema reference against the components schema bucket.
pub fn resolve_schema<'a>(reference: &str, components: &'a Components) -> Option<&'a Schema> {
    components.schemas.get(local_name(reference))
}

/// Resolves an example reference against the components examples bucket.
pub fn resolve_example<'a>(reference: &str, components: &'a Components) -> Option<&'a Example> {
    components.examples.get(local_name(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_strips_pointer_prefix() {
        assert_eq!(local_name("#/components/schemas/Pet"), "Pet");
        assert_eq!(local_name("#/components/examples/PetExample"), "PetExample");
    }

    #[test]
    fn test_local_name_prefix_depth_is_irrelevant() {
        assert_eq!(local_name("#/a/b/c/d/e/Pet"), "Pet");
        assert_eq!(local_name("Pet"), "Pet");
    }

    #[test]
    fn test_resolve_schema_missing_name() {
        let components = Components::default();
        assert!(resolve_schema("#/components/schemas/Missing", &components).is_none());
    }
}
