use super::{DependencyEdge, RawComponent};

/// Catalogue - the raw component list and dependency edges of one SBOM
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    components: Vec<RawComponent>,
    dependencies: Vec<DependencyEdge>,
}

impl Catalogue {
    pub fn new(components: Vec<RawComponent>, dependencies: Vec<DependencyEdge>) -> Self {
        Self {
            components,
            dependencies,
        }
    }

    pub fn components(&self) -> &[RawComponent] {
        &self.components
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.dependencies.is_empty()
    }

    /// Number of dependency entries, or of top-level components when the
    /// catalogue has no edges
    pub fn total_dependencies(&self) -> usize {
        if self.dependencies.is_empty() {
            self.components.len()
        } else {
            self.dependencies.len()
        }
    }
}
