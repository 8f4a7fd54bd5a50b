pub mod batch;
pub mod report;
pub mod validate;

pub use batch::execute_batch;
pub use report::execute_report;
pub use validate::execute_validate;
