/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the tree core free of presentation concerns.
mod output_format;
mod tree_request;
mod tree_response;

pub use output_format::OutputFormat;
pub use tree_request::TreeRequest;
pub use tree_response::TreeResponse;
