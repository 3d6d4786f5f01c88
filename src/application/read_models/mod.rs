//! Read models for rendering
//!
//! View-optimized structs that give formatters a flat copy of the tree
//! without exposing domain types.

mod node_view;
mod tree_read_model;
mod tree_read_model_builder;

pub use node_view::NodeView;
pub use tree_read_model::TreeReadModel;
pub use tree_read_model_builder::TreeReadModelBuilder;
