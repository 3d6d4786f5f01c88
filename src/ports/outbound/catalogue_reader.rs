use crate::dependency_tree::domain::Catalogue;
use crate::shared::Result;
use std::path::Path;

/// CatalogueReader port for loading a bill of materials
///
/// Implementations own the file format; the core only sees the resulting
/// [`Catalogue`] of raw components and dependency edges.
pub trait CatalogueReader {
    /// Reads and decodes the bill of materials at `bom_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid bill of materials
    fn read_catalogue(&self, bom_path: &Path) -> Result<Catalogue>;
}
