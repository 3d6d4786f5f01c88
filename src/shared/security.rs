use crate::shared::error::BomTreeError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest BOM document we are willing to load (100 MB)
pub const MAX_BOM_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects paths that are symbolic links
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| BomTreeError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {}: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(BomTreeError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} through a symbolic link is not allowed", operation),
            hint: "Point to the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Ensures `path` is a regular file that is not a symbolic link
///
/// Returns the file size so callers can apply [`validate_file_size`].
pub fn validate_regular_file(path: &Path) -> Result<u64> {
    validate_not_symlink(path, "Reading")?;

    let metadata = fs::metadata(path).map_err(|e| BomTreeError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(BomTreeError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(BomTreeError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Split the BOM or raise the limit deliberately".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "Reading").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/bom.json");
        assert!(validate_not_symlink(&path, "Reading").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("bom.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "Reading").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_regular_file_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "12345").unwrap();

        assert_eq!(validate_regular_file(&file_path).unwrap(), 5);
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();

        let err = validate_regular_file(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/bom.json");
        assert!(validate_file_size(1000, &path, MAX_BOM_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/bom.json");
        let err = validate_file_size(MAX_BOM_SIZE + 1, &path, MAX_BOM_SIZE).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
