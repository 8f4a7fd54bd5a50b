use super::{example, flatten, resolver};
use crate::error::{OasError, Result};
use crate::models::openapi::{
    OAuth2Flow, OpenApiDocument, Operation, Parameter, Schema, SecurityScheme,
};
use crate::models::report::{
    ApiResponseReport, ComponentReport, FieldReport, MethodInfo, OAuth2FlowReport, OpenApiReport,
    RequestBodyReport, RequestParameterReport, SchemaReport, SecurityRequirementReport,
    SecuritySchemaReport,
};
use indexmap::IndexMap;
use serde_json::Value;

const PASSWORD_GRANT: &str = "password";
const IMPLICIT_GRANT: &str = "implicit";
const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";
const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

/// Builds the flattened report model from a parsed document. Pure over
/// its input; building twice yields structurally equal output.
pub struct ReportBuilder<'a> {
    document: &'a OpenApiDocument,
    empty_schemas: IndexMap<String, Schema>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(document: &'a OpenApiDocument) -> Self {
        Self {
            document,
            empty_schemas: IndexMap::new(),
        }
    }

    pub fn build(&self) -> Result<OpenApiReport> {
        let title = self.document.title();
        tracing::info!("Starting to build open api report [{:?}]", title);

        let info = self.document.info.as_ref();
        let contact = info.and_then(|info| info.contact.as_ref());
        let methods = self.build_methods()?;
        let components = self.build_components();
        let security_schemes = self.build_security_schemes();

        let report = OpenApiReport {
            title: info.and_then(|info| info.title.clone()),
            description: info.and_then(|info| info.description.clone()),
            author: contact.and_then(|contact| contact.name.clone()),
            email: contact.and_then(|contact| contact.email.clone()),
            methods,
            components,
            security_schemes,
        };
        tracing::info!("Open api report [{:?}] has been built", title);
        Ok(report)
    }

    fn schemas(&self) -> &IndexMap<String, Schema> {
        self.document
            .components
            .as_ref()
            .map(|components| &components.schemas)
            .unwrap_or(&self.empty_schemas)
    }

    fn build_methods(&self) -> Result<Vec<MethodInfo>> {
        let methods = self
            .document
            .paths
            .iter()
            .map(|(path, path_item)| {
                // A method-less path cannot be represented in the output
                // format, so this is fatal for the whole build.
                let (method, operation) =
                    path_item
                        .operation()
                        .ok_or_else(|| OasError::OperationNotSpecified {
                            path: path.clone(),
                        })?;
                Ok(self.build_method_info(path, method.as_str(), operation))
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("[{}] methods report has been built", methods.len());
        Ok(methods)
    }

    fn build_method_info(&self, path: &str, method: &str, operation: &Operation) -> MethodInfo {
        let api_responses = self.build_api_responses(operation);
        tracing::debug!(
            "[{}] api responses has been built for method [{}]",
            api_responses.len(),
            path
        );
        MethodInfo {
            request_type: method.to_string(),
            endpoint: path.to_string(),
            summary: operation.summary.clone(),
            description: operation.description.clone(),
            request_body: self.build_request_body(operation),
            request_parameters: operation
                .parameters
                .iter()
                .map(|parameter| self.build_parameter_report(parameter))
                .collect(),
            api_responses,
            security: build_security_requirements(operation),
        }
    }

    fn build_parameter_report(&self, parameter: &Parameter) -> RequestParameterReport {
        RequestParameterReport {
            name: parameter.name.clone(),
            description: parameter.description.clone(),
            required: parameter.required.unwrap_or(false),
            location: parameter.location.clone(),
            example: parameter.example.as_ref().map(value_display),
            schema: parameter
                .schema
                .as_ref()
                .map(|schema| self.build_schema_report(schema)),
        }
    }

    fn build_request_body(&self, operation: &Operation) -> Option<RequestBodyReport> {
        let request_body = operation.request_body.as_ref()?;
        let mut report = RequestBodyReport {
            required: request_body.required.unwrap_or(false),
            ..Default::default()
        };
        // Only the first declared media type is represented; the report
        // format shows one example per body.
        if let Some((content_type, media_type)) = request_body.content.first() {
            report.content_type = Some(content_type.clone());
            report.schema = media_type
                .schema
                .as_ref()
                .map(|schema| self.build_schema_report(schema));
            report.schema_properties = media_type
                .schema
                .as_ref()
                .map(|schema| self.build_field_reports(schema))
                .unwrap_or_default();
            report.example =
                example::example_string(media_type, self.document.components.as_ref());
        }
        Some(report)
    }

    fn build_api_responses(&self, operation: &Operation) -> Vec<ApiResponseReport> {
        operation
            .responses
            .iter()
            .map(|(code, response)| {
                let mut report = ApiResponseReport {
                    response_code: code.clone(),
                    description: response.description.clone(),
                    ..Default::default()
                };
                if let Some((content_type, media_type)) = response.content.first() {
                    report.content_type = Some(content_type.clone());
                    report.example =
                        example::example_string(media_type, self.document.components.as_ref());
                    report.schema = media_type
                        .schema
                        .as_ref()
                        .map(|schema| self.build_schema_report(schema));
                }
                report
            })
            .collect()
    }

    fn build_components(&self) -> Vec<ComponentReport> {
        let schemas = self.schemas();
        let components = schemas
            .iter()
            .map(|(name, schema)| {
                let fields = self.build_field_reports(schema);
                tracing::debug!("[{}] fields has been built for component [{}]", fields.len(), name);
                ComponentReport {
                    name: name.clone(),
                    description: schema.description.clone(),
                    fields,
                }
            })
            .collect::<Vec<_>>();
        tracing::info!("[{}] components report has been built", components.len());
        components
    }

    fn build_field_reports(&self, schema: &Schema) -> Vec<FieldReport> {
        flatten::flatten_fields(schema, self.schemas())
            .into_iter()
            .map(|field| {
                let schema_report = self.build_schema_report(field.schema);
                FieldReport {
                    field_name: field.name.to_string(),
                    description: schema_report.description.clone(),
                    required: field.required,
                    schema: schema_report,
                }
            })
            .collect()
    }

    fn build_schema_report(&self, schema: &Schema) -> SchemaReport {
        let mut report = schema_report_base(schema);
        report.one_of_refs = schema
            .one_of
            .iter()
            .filter_map(|subtype| subtype.reference.as_deref())
            .map(|reference| resolver::local_name(reference).to_string())
            .collect();
        // One entry per array-nesting level.
        let mut items = schema.items.as_deref();
        while let Some(item_schema) = items {
            report.items_report.push(schema_report_base(item_schema));
            items = item_schema.items.as_deref();
        }
        report
    }

    fn build_security_schemes(&self) -> Vec<SecuritySchemaReport> {
        let schemes = match self.document.components.as_ref() {
            Some(components) => &components.security_schemes,
            None => return Vec::new(),
        };
        let reports = schemes
            .iter()
            .map(|(name, scheme)| build_security_scheme_report(name, scheme))
            .collect::<Vec<_>>();
        tracing::info!("[{}] security schema report has been built", reports.len());
        reports
    }
}

/// Direct field projection of one schema node, without oneOf or items
/// expansion.
fn schema_report_base(schema: &Schema) -> SchemaReport {
    SchemaReport {
        description: schema.description.clone(),
        schema_type: schema.schema_type.clone(),
        format: schema.format.clone(),
        object_type_ref: schema
            .reference
            .as_deref()
            .map(|reference| resolver::local_name(reference).to_string()),
        items_object_ref: schema
            .items
            .as_deref()
            .and_then(|items| items.reference.as_deref())
            .map(|reference| resolver::local_name(reference).to_string()),
        maximum: schema.maximum,
        exclusive_maximum: schema.exclusive_maximum.unwrap_or(false),
        minimum: schema.minimum,
        exclusive_minimum: schema.exclusive_minimum.unwrap_or(false),
        max_length: schema.max_length,
        min_length: schema.min_length,
        pattern: schema.pattern.as_deref().map(escape_pattern),
        max_items: schema.max_items,
        min_items: schema.min_items,
        enum_values: schema.enum_values.iter().map(value_display).collect(),
        one_of_refs: Vec::new(),
        items_report: Vec::new(),
    }
}

fn build_security_requirements(operation: &Operation) -> Vec<SecurityRequirementReport> {
    operation
        .security
        .iter()
        .flat_map(|requirement| requirement.iter())
        .map(|(name, scopes)| SecurityRequirementReport {
            name: name.clone(),
            scopes: scopes.clone(),
        })
        .collect()
}

fn build_security_scheme_report(name: &str, scheme: &SecurityScheme) -> SecuritySchemaReport {
    let mut report = SecuritySchemaReport {
        name: name.to_string(),
        scheme_type: scheme.scheme_type.clone(),
        description: scheme.description.clone(),
        location: scheme.location.clone(),
        scheme: scheme.scheme.clone(),
        bearer_format: scheme.bearer_format.clone(),
        oauth2_flows: Vec::new(),
    };
    if let Some(flows) = scheme.flows.as_ref() {
        add_oauth2_flow(&mut report, flows.password.as_ref(), PASSWORD_GRANT);
        add_oauth2_flow(&mut report, flows.implicit.as_ref(), IMPLICIT_GRANT);
        add_oauth2_flow(
            &mut report,
            flows.authorization_code.as_ref(),
            AUTHORIZATION_CODE_GRANT,
        );
        add_oauth2_flow(
            &mut report,
            flows.client_credentials.as_ref(),
            CLIENT_CREDENTIALS_GRANT,
        );
    }
    report
}

fn add_oauth2_flow(report: &mut SecuritySchemaReport, flow: Option<&OAuth2Flow>, grant_type: &str) {
    if let Some(flow) = flow {
        report.oauth2_flows.push(OAuth2FlowReport {
            grant_type: grant_type.to_string(),
            authorization_url: flow.authorization_url.clone(),
            token_url: flow.token_url.clone(),
            refresh_url: flow.refresh_url.clone(),
            scopes: flow.scopes.keys().cloned().collect(),
        });
    }
}

/// Renders a JSON value for display: strings unquoted, everything else
/// in JSON form.
fn value_display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The rendered output uses `|`-delimited tables, so pattern literals
/// escape the delimiter.
fn escape_pattern(pattern: &str) -> String {
    pattern.replace('|', "\\|")
}
