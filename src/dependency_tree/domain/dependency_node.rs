use super::ComponentRecord;

/// DependencyNode - one row of the dependency tree
///
/// The same component may appear under several parents; every appearance is
/// its own node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    component: ComponentRecord,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(component: ComponentRecord, children: Vec<DependencyNode>) -> Self {
        Self {
            component,
            children,
        }
    }

    pub fn leaf(component: ComponentRecord) -> Self {
        Self::new(component, Vec::new())
    }

    pub fn component(&self) -> &ComponentRecord {
        &self.component
    }

    pub fn name(&self) -> &str {
        self.component.name()
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a copy of this node carrying a different child list
    pub fn with_children(&self, children: Vec<DependencyNode>) -> Self {
        Self::new(self.component.clone(), children)
    }

    /// Number of nodes in this subtree, the node itself included
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DependencyNode::subtree_size)
            .sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DependencyNode::depth)
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn sort_recursively(&mut self) {
        sort_by_name(&mut self.children);
        for child in &mut self.children {
            child.sort_recursively();
        }
    }
}

/// Stable, case-insensitive ascending sort by component name
pub(crate) fn sort_by_name(nodes: &mut [DependencyNode]) {
    nodes.sort_by_cached_key(|node| node.component.sort_key());
}
