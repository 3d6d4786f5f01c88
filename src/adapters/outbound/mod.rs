pub mod console;
pub mod cyclonedx;
pub mod filesystem;
pub mod formatters;
