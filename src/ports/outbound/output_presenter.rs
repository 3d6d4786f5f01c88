use crate::shared::Result;

/// OutputPresenter port for delivering the formatted tree
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Writes the formatted content to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination path fails security validation
    fn present(&self, content: &str) -> Result<()>;
}
