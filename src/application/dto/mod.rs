/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters, keeping the
/// lifecycle domain isolated from I/O concerns.
mod check_request;
mod check_response;
mod report_format;

pub use check_request::{CheckRequest, DEFAULT_THRESHOLD_DAYS};
pub use check_response::{CheckResponse, RunMetadata};
pub use report_format::ReportFormat;
