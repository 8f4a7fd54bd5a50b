pub mod builder;
pub mod example;
pub mod flatten;
pub mod resolver;

pub use builder::ReportBuilder;
