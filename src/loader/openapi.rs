use crate::error::{OasError, Result};
use crate::models::openapi::OpenApiDocument;
use std::fs;
use std::path::Path;

const JSON_EXTENSION: &str = "json";

/// Loads an OpenAPI document from a `.json` file. A wrong extension and
/// a malformed body are distinct caller errors.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<OpenApiDocument> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    tracing::info!("Starting to read file [{}]", file_name);

    let extension = path.extension().and_then(|ext| ext.to_str());
    if extension != Some(JSON_EXTENSION) {
        return Err(OasError::InvalidFileExtension(file_name));
    }

    let content = fs::read_to_string(path)?;
    let document: OpenApiDocument = serde_json::from_str(&content)
        .map_err(|err| OasError::InvalidFileFormat(file_name.clone(), err.to_string()))?;
    tracing::info!("File [{}] has been read", file_name);
    Ok(document)
}
