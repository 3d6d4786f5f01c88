use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextTreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TreeFormatter;

/// Factory for creating tree formatters
///
/// Picks the formatter adapter for an output format so the CLI never names
/// concrete adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the given format
    ///
    /// `colored` only affects the text formatter.
    ///
    /// # Examples
    /// ```
    /// use bom_tree::application::dto::OutputFormat;
    /// use bom_tree::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Text, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextTreeFormatter::new(colored)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Progress message shown before formatting
    ///
    /// # Examples
    /// ```
    /// use bom_tree::application::dto::OutputFormat;
    /// use bom_tree::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON tree output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text tree output...",
            OutputFormat::Markdown => "📝 Generating Markdown tree output...",
            OutputFormat::Json => "📝 Generating JSON tree output...",
        }
    }
}
