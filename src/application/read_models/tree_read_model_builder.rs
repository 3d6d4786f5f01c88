//! Builder for constructing TreeReadModel from a use case response

use super::node_view::NodeView;
use super::tree_read_model::TreeReadModel;
use crate::application::dto::TreeResponse;
use crate::dependency_tree::domain::DependencyNode;
use crate::dependency_tree::services::FilterQuery;

/// Builder for constructing TreeReadModel from domain objects
pub struct TreeReadModelBuilder;

impl TreeReadModelBuilder {
    pub fn build(response: &TreeResponse) -> TreeReadModel {
        let query = response.query.as_ref();
        let roots: Vec<NodeView> = response
            .filtered
            .roots()
            .iter()
            .map(|root| Self::build_node(root, query))
            .collect();

        TreeReadModel {
            total_dependencies: response.total_dependencies,
            filter: query.map(|q| q.text().to_string()),
            roots,
            total_nodes: response.forest.node_count(),
            shown_nodes: response.filtered.node_count(),
        }
    }

    fn build_node(node: &DependencyNode, query: Option<&FilterQuery>) -> NodeView {
        let component = node.component();
        NodeView {
            name: component.name().to_string(),
            version: component.version().to_string(),
            component_type: component.component_type().to_string(),
            scope: component.scope().to_string(),
            matched: query.is_some_and(|q| q.matches(component.name())),
            children: node
                .children()
                .iter()
                .map(|child| Self::build_node(child, query))
                .collect(),
        }
    }
}
