/// DependencyEdge - "parent depends on children" as listed in the catalogue
///
/// Ids are not validated here; an id that resolves to nothing is dropped when
/// the forest is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    parent_id: String,
    child_ids: Vec<String>,
}

impl DependencyEdge {
    pub fn new(parent_id: impl Into<String>, child_ids: Vec<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            child_ids,
        }
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn child_ids(&self) -> &[String] {
        &self.child_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_edge_new() {
        let edge = DependencyEdge::new("a", vec!["b".to_string(), "c".to_string()]);

        assert_eq!(edge.parent_id(), "a");
        assert_eq!(edge.child_ids(), &["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_dependency_edge_without_children() {
        let edge = DependencyEdge::new("leaf".to_string(), vec![]);
        assert!(edge.child_ids().is_empty());
    }
}
