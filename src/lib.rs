//! bom-tree - dependency tree views over CycloneDX bills of materials
//!
//! This library turns the flat component list and dependency edges of a bill
//! of materials into an ordered forest, and narrows that forest to the
//! dependencies whose names match a filter while keeping their ancestors,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): Pure tree construction and filtering, no I/O
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_tree::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with its adapters
//! let use_case = RenderTreeUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! // Execute
//! let request = TreeRequest::new(PathBuf::from("bom.json"), Some("jackson".to_string()));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = TreeReadModelBuilder::build(&response);
//! let output = TextTreeFormatter::new(false).format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The domain services can also be used directly:
//!
//! ```
//! use bom_tree::prelude::*;
//!
//! let components = vec![
//!     RawComponent::new(Some("app"), Some("app")),
//!     RawComponent::new(Some("lib"), Some("lib")),
//! ];
//! let edges = vec![DependencyEdge::new("app", vec!["lib".to_string()])];
//!
//! let index = CatalogueIndex::build(&components);
//! let forest = ForestBuilder::build(&index, &edges, &components);
//! let filtered = HierarchyFilter::apply_text(&forest, "LIB");
//!
//! assert_eq!(filtered.roots()[0].name(), "app");
//! assert_eq!(filtered.roots()[0].children()[0].name(), "lib");
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::cyclonedx::CycloneDxParser;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextTreeFormatter,
    };
    pub use crate::application::dto::{OutputFormat, TreeRequest, TreeResponse};
    pub use crate::application::read_models::{NodeView, TreeReadModel, TreeReadModelBuilder};
    pub use crate::application::use_cases::RenderTreeUseCase;
    pub use crate::dependency_tree::domain::{
        Catalogue, ComponentIdentity, ComponentRecord, DependencyEdge, DependencyNode, Forest,
        RawComponent, UNKNOWN,
    };
    pub use crate::dependency_tree::services::{
        CatalogueIndex, FilterQuery, ForestBuilder, ForestSource, HierarchyFilter,
    };
    pub use crate::ports::outbound::{
        CatalogueReader, OutputPresenter, ProgressReporter, TreeFormatter,
    };
    pub use crate::shared::Result;
}
