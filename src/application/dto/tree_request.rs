use std::path::PathBuf;

/// TreeRequest - input to the render-tree use case
#[derive(Debug, Clone)]
pub struct TreeRequest {
    /// Path to the bill of materials document
    pub bom_path: PathBuf,
    /// Free filter text; `None` or blank text shows the whole tree
    pub filter: Option<String>,
}

impl TreeRequest {
    pub fn new(bom_path: PathBuf, filter: Option<String>) -> Self {
        Self { bom_path, filter }
    }
}
