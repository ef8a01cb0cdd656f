use crate::application::dto::CheckResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering a finished check
///
/// One implementation per report format; the format is chosen once at
/// startup by the formatter factory.
pub trait ReportFormatter {
    /// Renders resolutions, summary and run metadata as text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &CheckResponse) -> Result<String>;
}
