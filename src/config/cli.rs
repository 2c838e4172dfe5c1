use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::fs;

/// The site directory. Files are swapped in whole so a browser or the
/// next `--render-only` run never sees a half-written report.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    site_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_dir: site_dir.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        Ok(fs::read(self.site_dir.join(name)).await?)
    }

    async fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let target = self.site_dir.join(name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }

        // rename within one directory replaces the old file atomically
        let staging = target.with_extension("partial");
        fs::write(&staging, data).await?;
        fs::rename(&staging, &target).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path().join("build");
        let storage = LocalStorage::new(&site);

        storage.write_file("index.html", b"<html></html>").await.unwrap();

        assert!(site.join("index.html").exists());
        assert!(!site.join("index.partial").exists());
        assert_eq!(
            storage.read_file("index.html").await.unwrap(),
            b"<html></html>"
        );
    }

    #[tokio::test]
    async fn test_rewrite_replaces_previous_report() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("universities.json", b"[1, 2, 3]").await.unwrap();
        storage.write_file("universities.json", b"[]").await.unwrap();

        assert_eq!(storage.read_file("universities.json").await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(storage.read_file("universities.json").await.is_err());
    }
}
