mod catalogue_index;
mod forest_builder;
mod hierarchy_filter;

pub use catalogue_index::CatalogueIndex;
pub use forest_builder::{ForestBuilder, ForestSource};
pub use hierarchy_filter::{FilterQuery, HierarchyFilter};
