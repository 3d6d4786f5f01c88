/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the tree core and talks to infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
