use super::resolver;
use crate::models::openapi::Schema;
use indexmap::IndexMap;

/// One flattened field: its name, whether it is required, and the
/// schema node describing it. Borrows from the input document.
#[derive(Debug, Clone, Copy)]
pub struct FlatField<'a> {
    pub name: &'a str,
    pub required: bool,
    pub schema: &'a Schema,
}

/// Produces the full flattened field list for a schema, walking `allOf`
/// inheritance chains through the named schema map. A schema with
/// neither inline properties nor a supported composition yields an
/// empty list.
pub fn flatten_fields<'a>(
    schema: &'a Schema,
    schemas: &'a IndexMap<String, Schema>,
) -> Vec<FlatField<'a>> {
    if !schema.properties.is_empty() {
        simple_fields(schema, &schema.required)
    } else if schema.composition().is_some() {
        all_of_fields(schema, schemas)
    } else {
        Vec::new()
    }
}

/// Fields declared directly on a schema, with required-ness taken from
/// the given required-name list.
fn simple_fields<'a>(schema: &'a Schema, required: &[String]) -> Vec<FlatField<'a>> {
    schema
        .properties
        .iter()
        .map(|(name, field_schema)| FlatField {
            name,
            required: required.iter().any(|r| r == name),
            schema: field_schema,
        })
        .collect()
}

fn all_of_fields<'a>(
    schema: &'a Schema,
    schemas: &'a IndexMap<String, Schema>,
) -> Vec<FlatField<'a>> {
    let composition = match schema.composition() {
        Some(composition) => composition,
        None => return Vec::new(),
    };

    // Walk the parent chain upwards; an unresolvable reference or a
    // reference cycle ends the chain. Popping the stack yields the root
    // ancestor first.
    let mut stack = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    let mut parent_ref = composition.parent_ref;
    while let Some(parent) = schemas.get(resolver::local_name(parent_ref)) {
        let name = resolver::local_name(parent_ref);
        if seen.contains(&name) {
            break;
        }
        seen.push(name);
        stack.push(parent);
        match parent.composition() {
            Some(parent_composition) => parent_ref = parent_composition.parent_ref,
            None => break,
        }
    }

    // Ancestors root-first; the first ancestor to declare a name wins.
    // A composed ancestor keeps its own fields in the child slot of its
    // allOf, not in top-level properties.
    let mut fields: Vec<FlatField<'a>> = Vec::new();
    while let Some(ancestor) = stack.pop() {
        let own = ancestor
            .composition()
            .map(|ancestor_composition| ancestor_composition.own)
            .unwrap_or(ancestor);
        for field in simple_fields(own, &ancestor.required) {
            if !fields.iter().any(|existing| existing.name == field.name) {
                fields.push(field);
            }
        }
    }

    // The child's own fields, with required-ness computed against the
    // top-level schema's required list. A child declaration replaces a
    // same-named inherited field in place.
    for field in simple_fields(composition.own, &schema.required) {
        match fields.iter().position(|existing| existing.name == field.name) {
            Some(index) => fields[index] = field,
            None => fields.push(field),
        }
    }
    fields
}
