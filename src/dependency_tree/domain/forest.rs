use super::DependencyNode;

/// Forest aggregate - the ordered root nodes of the dependency tree
///
/// Built once per catalogue load and never mutated afterwards; filtering
/// produces a new `Forest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<DependencyNode>,
}

impl Forest {
    pub fn new(roots: Vec<DependencyNode>) -> Self {
        Self { roots }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[DependencyNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Total number of nodes across all trees
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(DependencyNode::subtree_size).sum()
    }

    /// Depth of the deepest tree, 0 for an empty forest
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(DependencyNode::depth)
            .max()
            .unwrap_or(0)
    }
}
