use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Formats form a closed set, so the choice is a plain match on
/// [`ReportFormat`] made once at startup.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// `colored` only affects the text format.
    ///
    /// # Examples
    /// ```
    /// use eol_check::application::dto::ReportFormat;
    /// use eol_check::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Json, false);
    /// ```
    pub fn create(format: ReportFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(TextFormatter::with_color(colored)),
            ReportFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Progress message shown while rendering `format`
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Text => "📝 Rendering text report...",
            ReportFormat::Json => "📝 Rendering JSON report...",
        }
    }
}
