/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: BOM decoding, file
/// access, formatting and console reporting.
pub mod outbound;
