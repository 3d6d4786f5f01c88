/// Result alias used by every fallible operation outside the tree core.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
