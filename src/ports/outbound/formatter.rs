use crate::application::read_models::TreeReadModel;
use crate::shared::Result;

/// TreeFormatter port for turning the tree read model into output text
pub trait TreeFormatter {
    /// Formats the (possibly filtered) dependency tree
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &TreeReadModel) -> Result<String>;
}
