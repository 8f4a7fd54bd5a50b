pub mod openapi;
pub mod report;
