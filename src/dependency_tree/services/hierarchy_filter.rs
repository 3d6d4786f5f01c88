use crate::dependency_tree::domain::{DependencyNode, Forest};

/// FilterQuery - case-insensitive substring match against node names
///
/// Blank text does not produce a query; callers treat that as "no filter".
/// The text is matched as typed, surrounding spaces included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    text: String,
    needle: String,
}

impl FilterQuery {
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}

/// HierarchyFilter service for narrowing a forest while keeping context
///
/// A node stays when its own name matches or when something below it does.
/// A matching node keeps its whole subtree; a node kept only for a matching
/// descendant keeps only the branches that lead to matches.
pub struct HierarchyFilter;

impl HierarchyFilter {
    /// Applies a name predicate to every tree of the forest
    ///
    /// The input is left untouched; the result is a new forest in the same
    /// order, containing only the kept nodes.
    pub fn apply<P>(forest: &Forest, predicate: P) -> Forest
    where
        P: Fn(&str) -> bool,
    {
        let roots = forest
            .roots()
            .iter()
            .filter_map(|root| Self::filter_node(root, &predicate))
            .collect();
        Forest::new(roots)
    }

    /// Applies free filter text; blank text returns the forest unchanged
    pub fn apply_text(forest: &Forest, filter_text: &str) -> Forest {
        match FilterQuery::parse(filter_text) {
            Some(query) => Self::apply_query(forest, &query),
            None => forest.clone(),
        }
    }

    pub fn apply_query(forest: &Forest, query: &FilterQuery) -> Forest {
        let filtered = Self::apply(forest, |name| query.matches(name));
        tracing::debug!(
            "Filter '{}' kept {} of {} node(s)",
            query.text(),
            filtered.node_count(),
            forest.node_count()
        );
        filtered
    }

    fn filter_node<P>(node: &DependencyNode, predicate: &P) -> Option<DependencyNode>
    where
        P: Fn(&str) -> bool,
    {
        if predicate(node.name()) {
            return Some(node.clone());
        }

        let kept: Vec<DependencyNode> = node
            .children()
            .iter()
            .filter_map(|child| Self::filter_node(child, predicate))
            .collect();

        if kept.is_empty() {
            None
        } else {
            Some(node.with_children(kept))
        }
    }
}
