//! Tree read model for formatters
//!
//! A denormalized copy of the filtered forest with everything a formatter
//! needs to render it, including the empty-state decision.

use super::node_view::NodeView;

/// Main read model for rendering a dependency tree
#[derive(Debug, Clone)]
pub struct TreeReadModel {
    /// Dependency entries in the catalogue
    pub total_dependencies: usize,
    /// Active filter text, if any
    pub filter: Option<String>,
    /// Roots of the tree to render (already filtered)
    pub roots: Vec<NodeView>,
    /// Nodes in the unfiltered forest
    pub total_nodes: usize,
    /// Nodes in `roots`, descendants included
    pub shown_nodes: usize,
}

impl TreeReadModel {
    /// Message to render in place of an empty tree, if the tree is empty
    pub fn empty_state_message(&self) -> Option<String> {
        if !self.roots.is_empty() {
            return None;
        }
        match (&self.filter, self.total_nodes) {
            (Some(filter), total) if total > 0 => {
                Some(format!("No dependencies match filter '{}'.", filter))
            }
            _ => Some("No dependencies found in the BOM.".to_string()),
        }
    }
}
