use crate::error::{OasError, Result};
use crate::models::openapi::OpenApiDocument;

const API_DOCS_PATH: &str = "/v3/api-docs";

/// Fetches an OpenAPI document from a remote service base URL. A non-2xx
/// status or a transport failure is an external integration error; an
/// unparseable body is an invalid format error.
pub async fn fetch_document(base_url: &str, insecure: bool) -> Result<OpenApiDocument> {
    tracing::info!("Starting to read open api from [{}]", base_url);
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(insecure)
        .build()
        .map_err(|err| OasError::ExternalIntegration(format!("Failed to build HTTP client: {err}")))?;

    let url = format!("{}{}", base_url.trim_end_matches('/'), API_DOCS_PATH);
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| OasError::ExternalIntegration(format!("Request to [{url}] failed: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(OasError::ExternalIntegration(format!(
            "Got [{}] code from [{}]",
            status.as_u16(),
            base_url
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|err| OasError::ExternalIntegration(format!("Failed to read body from [{url}]: {err}")))?;
    let document: OpenApiDocument = serde_json::from_str(&body)
        .map_err(|err| OasError::InvalidFileFormat(base_url.to_string(), err.to_string()))?;
    tracing::info!("Open api docs has been fetched from [{}]", base_url);
    Ok(document)
}
