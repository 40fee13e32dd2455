use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-file storage rooted at a base directory. Writes go through a
/// sibling temp file and a rename, so a crash mid-write cannot leave a
/// truncated page behind.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.full_path(path))?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Sibling temp file keeps the rename on one filesystem.
        let mut tmp = full_path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, data)?;
        fs::rename(&tmp, &full_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().to_str().unwrap().to_string());

        storage.write_file("pages/index.html", b"<html></html>").unwrap();
        let data = storage.read_file("pages/index.html").unwrap();
        assert_eq!(data, b"<html></html>");
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().to_str().unwrap().to_string());

        storage.write_file("page.html", b"old").unwrap();
        storage.write_file("page.html", b"new").unwrap();
        assert_eq!(storage.read_file("page.html").unwrap(), b"new");
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().to_str().unwrap().to_string());

        storage.write_file("page.html", b"content").unwrap();
        assert!(!temp.path().join("page.html.tmp").exists());
    }

    #[test]
    fn test_read_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().to_str().unwrap().to_string());

        assert!(storage.read_file("nope.json").is_err());
    }
}
