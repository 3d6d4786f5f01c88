use crate::dependency_tree::domain::Forest;
use crate::dependency_tree::services::{FilterQuery, HierarchyFilter};

/// TreeResponse - the built forest plus the view of it selected by the filter
///
/// `forest` is the full tree for the loaded catalogue and is never modified.
/// `filtered` is what should be rendered; without a filter it equals `forest`.
#[derive(Debug, Clone)]
pub struct TreeResponse {
    pub forest: Forest,
    pub filtered: Forest,
    pub query: Option<FilterQuery>,
    /// Dependency entries in the catalogue (top-level components when it has none)
    pub total_dependencies: usize,
}

impl TreeResponse {
    pub fn new(
        forest: Forest,
        filtered: Forest,
        query: Option<FilterQuery>,
        total_dependencies: usize,
    ) -> Self {
        Self {
            forest,
            filtered,
            query,
            total_dependencies,
        }
    }

    /// Re-filters the same forest with new text, without reloading the catalogue
    pub fn refilter(&self, filter_text: &str) -> Self {
        let query = FilterQuery::parse(filter_text);
        let filtered = match &query {
            Some(query) => HierarchyFilter::apply_query(&self.forest, query),
            None => self.forest.clone(),
        };
        Self::new(self.forest.clone(), filtered, query, self.total_dependencies)
    }
}
