use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// OpenAPI v3 document root.
/// https://spec.openapis.org/oas/v3.0.3
///
/// Only the parts needed for report building and linting are modeled;
/// unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version string (e.g., "3.0.1")
    #[serde(default)]
    pub openapi: String,

    /// Metadata about the API
    #[serde(default)]
    pub info: Option<Info>,

    /// Endpoint path template -> path item
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components
    #[serde(default)]
    pub components: Option<Components>,
}

impl OpenApiDocument {
    /// API title, if declared
    pub fn title(&self) -> Option<&str> {
        self.info.as_ref().and_then(|info| info.title.as_deref())
    }

    /// Named component schemas, if the components section declares any
    pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
        self.components
            .as_ref()
            .map(|c| &c.schemas)
            .filter(|schemas| !schemas.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

/// HTTP methods in OpenAPI path item declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub get: Option<Operation>,

    #[serde(default)]
    pub post: Option<Operation>,

    #[serde(default)]
    pub put: Option<Operation>,

    #[serde(default)]
    pub delete: Option<Operation>,

    #[serde(default)]
    pub patch: Option<Operation>,

    #[serde(default)]
    pub options: Option<Operation>,

    #[serde(default)]
    pub head: Option<Operation>,

    #[serde(default)]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// All declared operations as (method, operation) pairs, in fixed
    /// method order. Replaces scanning eight optional slots at every
    /// call site.
    pub fn operations(&self) -> Vec<(HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Delete, &self.delete),
            (HttpMethod::Patch, &self.patch),
            (HttpMethod::Options, &self.options),
            (HttpMethod::Head, &self.head),
            (HttpMethod::Trace, &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
        .collect()
    }

    /// The single present operation. A path item is expected to carry
    /// exactly one; callers treat `None` as a structural error.
    pub fn operation(&self) -> Option<(HttpMethod, &Operation)> {
        self.operations().into_iter().next()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "operationId")]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default, rename = "requestBody")]
    pub request_body: Option<RequestBody>,

    /// Response code -> response
    #[serde(default)]
    pub responses: IndexMap<String, ApiResponse>,

    /// Security requirements: scheme name -> scope list
    #[serde(default)]
    pub security: Vec<IndexMap<String, Vec<String>>>,

    #[serde(default)]
    pub deprecated: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,

    /// Parameter location: query, path, header or cookie
    #[serde(default, rename = "in")]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: Option<bool>,

    #[serde(default)]
    pub deprecated: Option<bool>,

    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,

    #[serde(default)]
    pub schema: Option<Schema>,

    #[serde(default)]
    pub examples: IndexMap<String, Example>,

    #[serde(default)]
    pub example: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub description: Option<String>,

    /// Content type -> media type
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: Option<bool>,

    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Schema>,

    /// Named examples; the first entry in declaration order is used
    #[serde(default)]
    pub examples: IndexMap<String, Example>,

    #[serde(default)]
    pub example: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub value: Option<Value>,

    #[serde(default, rename = "externalValue")]
    pub external_value: Option<String>,

    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub description: Option<String>,

    /// Content type -> media type
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,

    #[serde(default)]
    pub responses: IndexMap<String, ApiResponse>,

    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(default)]
    pub examples: IndexMap<String, Example>,

    #[serde(default, rename = "requestBodies")]
    pub request_bodies: IndexMap<String, RequestBody>,

    #[serde(default, rename = "securitySchemes")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// Schema tree node. A schema with a non-empty `reference` is a pointer;
/// its other fields are not meaningful until resolved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "type")]
    pub schema_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub maximum: Option<f64>,

    #[serde(default, rename = "exclusiveMaximum")]
    pub exclusive_maximum: Option<bool>,

    #[serde(default)]
    pub minimum: Option<f64>,

    #[serde(default, rename = "exclusiveMinimum")]
    pub exclusive_minimum: Option<bool>,

    #[serde(default, rename = "maxLength")]
    pub max_length: Option<u64>,

    #[serde(default, rename = "minLength")]
    pub min_length: Option<u64>,

    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default, rename = "maxItems")]
    pub max_items: Option<u64>,

    #[serde(default, rename = "minItems")]
    pub min_items: Option<u64>,

    #[serde(default, rename = "uniqueItems")]
    pub unique_items: Option<bool>,

    #[serde(default, rename = "maxProperties")]
    pub max_properties: Option<u64>,

    #[serde(default, rename = "minProperties")]
    pub min_properties: Option<u64>,

    /// Names of required properties
    #[serde(default)]
    pub required: Vec<String>,

    /// Property name -> schema, in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,

    #[serde(default)]
    pub nullable: Option<bool>,

    #[serde(default, rename = "readOnly")]
    pub read_only: Option<bool>,

    #[serde(default, rename = "writeOnly")]
    pub write_only: Option<bool>,

    #[serde(default)]
    pub example: Option<Value>,

    #[serde(default)]
    pub deprecated: Option<bool>,

    #[serde(default, rename = "enum")]
    pub enum_values: Vec<Value>,

    /// Items schema for arrays; may nest for arrays-of-arrays
    #[serde(default)]
    pub items: Option<Box<Schema>>,

    /// Polymorphic subtype references
    #[serde(default, rename = "oneOf")]
    pub one_of: Vec<Schema>,

    /// Composition: by convention a parent reference followed by the
    /// child's own schema
    #[serde(default, rename = "allOf")]
    pub all_of: Vec<Schema>,
}

/// Tagged view of an `allOf` composition: the parent pointer and the
/// child's own schema, extracted once instead of indexed positionally.
#[derive(Debug, Clone, Copy)]
pub struct AllOfComposition<'a> {
    pub parent_ref: &'a str,
    pub own: &'a Schema,
}

impl Schema {
    /// Returns the tagged composition when this schema follows the
    /// two-element `allOf` convention with a pure reference in parent
    /// position. Longer lists or a non-reference parent are unsupported
    /// and yield no composition.
    pub fn composition(&self) -> Option<AllOfComposition<'_>> {
        if self.all_of.len() != 2 {
            return None;
        }
        let parent_ref = self.all_of[0].reference.as_deref()?;
        if parent_ref.is_empty() {
            return None;
        }
        Some(AllOfComposition {
            parent_ref,
            own: &self.all_of[1],
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityScheme {
    #[serde(default, rename = "type")]
    pub scheme_type: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "in")]
    pub location: Option<String>,

    #[serde(default)]
    pub scheme: Option<String>,

    #[serde(default, rename = "bearerFormat")]
    pub bearer_format: Option<String>,

    #[serde(default)]
    pub flows: Option<OAuth2Flows>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuth2Flows {
    #[serde(default)]
    pub implicit: Option<OAuth2Flow>,

    #[serde(default)]
    pub password: Option<OAuth2Flow>,

    #[serde(default, rename = "clientCredentials")]
    pub client_credentials: Option<OAuth2Flow>,

    #[serde(default, rename = "authorizationCode")]
    pub authorization_code: Option<OAuth2Flow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuth2Flow {
    #[serde(default, rename = "authorizationUrl")]
    pub authorization_url: Option<String>,

    #[serde(default, rename = "tokenUrl")]
    pub token_url: Option<String>,

    #[serde(default, rename = "refreshUrl")]
    pub refresh_url: Option<String>,

    /// Scope name -> scope description; only names are reported
    #[serde(default)]
    pub scopes: IndexMap<String, String>,
}
