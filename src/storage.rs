//! Filesystem storage for generated PDF reports.
//!
//! Reports are kept as `<uid>.pdf` files inside a single directory. Writes go
//! through a temporary file and a rename so readers never observe a partially
//! written document.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::types::ReportId;

pub const REPORT_EXTENSION: &str = "pdf";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence of rendered report documents.
pub trait ReportStorage {
    fn save_report(&self, uid: ReportId, content: &[u8]) -> StorageResult<()>;
    fn load_report(&self, uid: ReportId) -> StorageResult<Option<Vec<u8>>>;
    /// Identifiers of every stored report, sorted.
    fn list_reports(&self) -> StorageResult<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct FsReportStorage {
    root: PathBuf,
}

impl FsReportStorage {
    /// Opens the storage directory, creating it when missing.
    pub fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, uid: ReportId) -> PathBuf {
        self.root.join(format!("{uid}.{REPORT_EXTENSION}"))
    }
}

impl ReportStorage for FsReportStorage {
    fn save_report(&self, uid: ReportId, content: &[u8]) -> StorageResult<()> {
        // The temp file is removed on drop unless persisted.
        let mut file = NamedTempFile::new_in(&self.root)?;
        file.write_all(content)?;
        file.as_file().sync_all()?;
        file.persist(self.path_for(uid))
            .map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }

    fn load_report(&self, uid: ReportId) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(uid)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_reports(&self) -> StorageResult<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(REPORT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && !stem.starts_with('.')
            {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_content() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsReportStorage::new(dir.path()).unwrap();
        let uid = ReportId::new();

        storage.save_report(uid, b"%PDF-1.3 test").unwrap();

        assert_eq!(
            storage.load_report(uid).unwrap().as_deref(),
            Some(&b"%PDF-1.3 test"[..])
        );
    }

    #[test]
    fn load_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsReportStorage::new(dir.path()).unwrap();
        assert!(storage.load_report(ReportId::new()).unwrap().is_none());
    }

    #[test]
    fn save_replaces_existing_report_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsReportStorage::new(dir.path()).unwrap();
        let uid = ReportId::new();

        storage.save_report(uid, b"first").unwrap();
        storage.save_report(uid, b"second").unwrap();

        assert_eq!(
            storage.load_report(uid).unwrap().as_deref(),
            Some(&b"second"[..])
        );
        assert_eq!(fs::read_dir(storage.root()).unwrap().count(), 1);
        assert_eq!(storage.list_reports().unwrap(), vec![uid.to_string()]);
    }

    #[test]
    fn list_only_includes_pdf_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsReportStorage::new(dir.path().join("reports")).unwrap();
        let first = ReportId::new();
        let second = ReportId::new();
        storage.save_report(first, b"a").unwrap();
        storage.save_report(second, b"b").unwrap();
        fs::write(storage.root().join("notes.txt"), b"ignored").unwrap();
        fs::create_dir(storage.root().join("nested.pdf")).unwrap();

        let mut expected = vec![first.to_string(), second.to_string()];
        expected.sort();
        assert_eq!(storage.list_reports().unwrap(), expected);
    }
}
