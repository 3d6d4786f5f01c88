use crate::adapters::outbound::cyclonedx::CycloneDxParser;
use crate::dependency_tree::domain::Catalogue;
use crate::ports::outbound::CatalogueReader;
use crate::shared::error::BomTreeError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_BOM_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading a CycloneDX JSON BOM from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after rejecting symlinks, non-regular files and
    /// oversized files
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path)?;
        validate_file_size(file_size, path, MAX_BOM_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            BomTreeError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogueReader for FileSystemReader {
    fn read_catalogue(&self, bom_path: &Path) -> Result<Catalogue> {
        if !bom_path.exists() {
            return Err(BomTreeError::BomNotFound {
                path: bom_path.to_path_buf(),
                suggestion: "Pass the path of a CycloneDX JSON file, e.g. `bom-tree target/bom.json`."
                    .to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(bom_path)?;

        CycloneDxParser::parse(&content).map_err(|e| {
            BomTreeError::BomParseError {
                path: bom_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_catalogue_success() {
        let temp_dir = TempDir::new().unwrap();
        let bom_path = temp_dir.path().join("bom.json");
        fs::write(
            &bom_path,
            r#"{"bomFormat": "CycloneDX", "components": [{"bom-ref": "a", "name": "alpha"}]}"#,
        )
        .unwrap();

        let catalogue = FileSystemReader::new().read_catalogue(&bom_path).unwrap();

        assert_eq!(catalogue.components().len(), 1);
        assert_eq!(catalogue.components()[0].name.as_deref(), Some("alpha"));
    }

    #[test]
    fn test_read_catalogue_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileSystemReader::new()
            .read_catalogue(&temp_dir.path().join("bom.json"))
            .unwrap_err();

        assert!(err.to_string().contains("Bill of materials not found"));
    }

    #[test]
    fn test_read_catalogue_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let bom_path = temp_dir.path().join("bom.json");
        fs::write(&bom_path, "{ broken").unwrap();

        let err = FileSystemReader::new().read_catalogue(&bom_path).unwrap_err();

        assert!(err
            .to_string()
            .contains("Failed to read bill of materials data"));
    }

    #[test]
    fn test_read_catalogue_directory() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileSystemReader::new()
            .read_catalogue(temp_dir.path())
            .unwrap_err();

        assert!(err.to_string().contains("Not a regular file"));
    }
}
