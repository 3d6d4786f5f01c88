pub mod catalogue;
pub mod component;
pub mod dependency_edge;
pub mod dependency_node;
pub mod forest;

pub use catalogue::Catalogue;
pub use component::{ComponentIdentity, ComponentRecord, RawComponent, UNKNOWN};
pub use dependency_edge::DependencyEdge;
pub use dependency_node::DependencyNode;
pub use forest::Forest;
