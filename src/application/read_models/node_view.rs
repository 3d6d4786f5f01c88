//! Node view structs for the tree read model

/// View representation of one tree row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub name: String,
    pub version: String,
    pub component_type: String,
    pub scope: String,
    /// True when this node's own name matched the active filter
    pub matched: bool,
    pub children: Vec<NodeView>,
}
