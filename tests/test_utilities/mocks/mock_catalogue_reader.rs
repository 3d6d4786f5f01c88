use bom_tree::prelude::*;
use std::path::Path;

/// Mock CatalogueReader for testing
///
/// Returns a fixed catalogue, or fails like an unreadable BOM.
pub struct MockCatalogueReader {
    catalogue: Option<Catalogue>,
}

impl MockCatalogueReader {
    pub fn new(components: Vec<RawComponent>, dependencies: Vec<DependencyEdge>) -> Self {
        Self {
            catalogue: Some(Catalogue::new(components, dependencies)),
        }
    }

    /// Parses CycloneDX JSON up front, so tests can describe catalogues as documents
    pub fn from_json(content: &str) -> Self {
        Self {
            catalogue: Some(CycloneDxParser::parse(content).unwrap()),
        }
    }

    pub fn with_failure() -> Self {
        Self { catalogue: None }
    }
}

impl CatalogueReader for MockCatalogueReader {
    fn read_catalogue(&self, bom_path: &Path) -> Result<Catalogue> {
        match &self.catalogue {
            Some(catalogue) => Ok(catalogue.clone()),
            None => anyhow::bail!(
                "Failed to read bill of materials data: {}",
                bom_path.display()
            ),
        }
    }
}
