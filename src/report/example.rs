use super::resolver;
use crate::models::openapi::{Components, MediaType};
use serde_json::Value;

/// Resolves a representative example value for a media type. Named
/// examples take priority over the inline `example`; the first named
/// entry in declaration order is used, following its reference into the
/// components examples bucket when present. A dangling example
/// reference is non-fatal and yields no value.
pub fn example_value<'a>(
    media_type: &'a MediaType,
    components: Option<&'a Components>,
) -> Option<&'a Value> {
    if let Some((_, example)) = media_type.examples.first() {
        if let Some(reference) = example.reference.as_deref().filter(|r| !r.is_empty()) {
            return match components.and_then(|c| resolver::resolve_example(reference, c)) {
                Some(resolved) => resolved.value.as_ref(),
                None => {
                    tracing::warn!("Can't find example with key [{}]", resolver::local_name(reference));
                    None
                }
            };
        }
        if example.value.is_some() {
            return example.value.as_ref();
        }
    }
    media_type.example.as_ref()
}

/// Serializes an example value to an indented display string. A
/// serialization failure degrades to the raw value rendering instead of
/// aborting report generation.
pub fn example_string(media_type: &MediaType, components: Option<&Components>) -> Option<String> {
    let value = example_value(media_type, components)?;
    match serde_json::to_string_pretty(value) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::error!("Can't serialize example to json: {}", err);
            Some(value.to_string())
        }
    }
}
