/// ProgressReporter port for user-facing status messages
///
/// Messages go somewhere that does not interfere with the rendered tree
/// (stderr for the CLI).
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the whole operation
    fn report_completion(&self, message: &str);
}
