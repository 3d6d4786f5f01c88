//! Dependency tree core
//!
//! Pure tree-construction and hierarchy-preserving filter logic. Nothing in
//! this module performs I/O or knows about any SBOM file format.

pub mod domain;
pub mod services;
