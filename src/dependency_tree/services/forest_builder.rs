use crate::dependency_tree::domain::dependency_node::sort_by_name;
use crate::dependency_tree::domain::{
    ComponentIdentity, ComponentRecord, DependencyEdge, DependencyNode, Forest, RawComponent,
};
use crate::dependency_tree::services::CatalogueIndex;
use std::collections::HashMap;

/// Where the tree structure comes from, decided once per build
#[derive(Debug, Clone, Copy)]
pub enum ForestSource<'a> {
    /// Explicit "depends on" edges resolved through the index
    EdgeGraph {
        index: &'a CatalogueIndex,
        edges: &'a [DependencyEdge],
    },
    /// No edges: components carry their children inline, one level deep
    NestedComponents(&'a [RawComponent]),
}

impl<'a> ForestSource<'a> {
    /// Edge mode whenever there is at least one edge, nested mode otherwise
    pub fn select(
        index: &'a CatalogueIndex,
        edges: &'a [DependencyEdge],
        raw_components: &'a [RawComponent],
    ) -> Self {
        if edges.is_empty() {
            ForestSource::NestedComponents(raw_components)
        } else {
            ForestSource::EdgeGraph { index, edges }
        }
    }
}

/// ForestBuilder service for turning a catalogue into a sorted forest
///
/// Total over its input: dangling ids are dropped and missing fields are
/// normalized, nothing is reported as an error.
pub struct ForestBuilder;

impl ForestBuilder {
    /// Builds the forest for a catalogue
    ///
    /// # Arguments
    /// * `index` - Id lookup built from `raw_components`
    /// * `edges` - Dependency edges; an empty slice selects nested mode
    /// * `raw_components` - The raw catalogue, used by nested mode
    pub fn build(
        index: &CatalogueIndex,
        edges: &[DependencyEdge],
        raw_components: &[RawComponent],
    ) -> Forest {
        Self::build_from(ForestSource::select(index, edges, raw_components))
    }

    pub fn build_from(source: ForestSource<'_>) -> Forest {
        let mut roots = match source {
            ForestSource::EdgeGraph { index, edges } => Self::build_edge_graph(index, edges),
            ForestSource::NestedComponents(components) => Self::build_nested(components),
        };

        sort_by_name(&mut roots);
        for root in &mut roots {
            root.sort_recursively();
        }

        tracing::debug!(
            "Built forest with {} root(s) and {} node(s)",
            roots.len(),
            roots.iter().map(DependencyNode::subtree_size).sum::<usize>()
        );

        Forest::new(roots)
    }

    /// One root per resolved parent, its resolved children attached as leaves
    ///
    /// A child that is a parent elsewhere shows its own children under its
    /// own root, so the forest grows with the number of edges.
    fn build_edge_graph(index: &CatalogueIndex, edges: &[DependencyEdge]) -> Vec<DependencyNode> {
        RootTable::fold(index, edges)
            .entries
            .into_iter()
            .map(|entry| {
                let children = entry
                    .children
                    .into_iter()
                    .map(DependencyNode::leaf)
                    .collect();
                DependencyNode::new(entry.component, children)
            })
            .collect()
    }

    fn build_nested(components: &[RawComponent]) -> Vec<DependencyNode> {
        components
            .iter()
            .map(|raw| {
                let children = raw
                    .components
                    .iter()
                    .map(|child| DependencyNode::leaf(ComponentRecord::from_raw(child)))
                    .collect();
                DependencyNode::new(ComponentRecord::from_raw(raw), children)
            })
            .collect()
    }
}

#[derive(Debug)]
struct RootEntry {
    component: ComponentRecord,
    children: Vec<ComponentRecord>,
}

/// Resolved parents with their resolved children, folded from the edge list
#[derive(Debug, Default)]
struct RootTable {
    /// In order of first appearance, one entry per component identity
    entries: Vec<RootEntry>,
    positions: HashMap<ComponentIdentity, usize>,
}

impl RootTable {
    fn fold(index: &CatalogueIndex, edges: &[DependencyEdge]) -> Self {
        edges.iter().fold(Self::default(), |mut acc, edge| {
            let parent_id = edge.parent_id();
            let Some(parent) = index.resolve(parent_id) else {
                tracing::debug!("Skipping dependency entry for unknown component '{}'", parent_id);
                return acc;
            };

            let resolved = edge.child_ids().iter().filter_map(|child_id| {
                let child = index.resolve(child_id);
                if child.is_none() {
                    tracing::debug!(
                        "Dropping unknown dependency '{}' of '{}'",
                        child_id,
                        parent_id
                    );
                }
                child.cloned()
            });

            match acc.positions.get(&parent.identity()) {
                Some(&position) => acc.entries[position].children.extend(resolved),
                None => {
                    acc.positions.insert(parent.identity(), acc.entries.len());
                    acc.entries.push(RootEntry {
                        component: parent.clone(),
                        children: resolved.collect(),
                    });
                }
            }
            acc
        })
    }
}
