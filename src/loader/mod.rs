mod openapi;
mod remote;

pub use openapi::load_document;
pub use remote::fetch_document;
