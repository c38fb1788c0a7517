use crate::core::Storage;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;

    fn create(&self, path: &str) -> Result<BufWriter<File>> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&full_path)?;
        Ok(BufWriter::new(file))
    }

    fn locate(&self, path: &str) -> String {
        if self.base_path == Path::new(".") {
            path.to_string()
        } else {
            self.full_path(path).display().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let mut writer = storage.create("nested/dir/vectors.txt").unwrap();
        writer.write_all(b"[1],\n").unwrap();
        drop(writer);

        let content = fs::read_to_string(temp_dir.path().join("nested/dir/vectors.txt")).unwrap();
        assert_eq!(content, "[1],\n");
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("vectors.txt"), "old contents that are long\n").unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let mut writer = storage.create("vectors.txt").unwrap();
        writer.write_all(b"[2],\n").unwrap();
        writer.flush().unwrap();
        drop(writer);

        let content = fs::read_to_string(temp_dir.path().join("vectors.txt")).unwrap();
        assert_eq!(content, "[2],\n");
    }

    #[test]
    fn test_create_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("blocker"), "").unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("blocker"));

        assert!(storage.create("vectors.txt").is_err());
    }

    #[test]
    fn test_locate() {
        assert_eq!(LocalStorage::current_dir().locate("vectors.txt"), "vectors.txt");

        let storage = LocalStorage::new("out");
        assert_eq!(
            storage.locate("vectors.txt"),
            Path::new("out").join("vectors.txt").display().to_string()
        );
    }
}
