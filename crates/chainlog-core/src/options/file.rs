//! File option normalization

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use url::Url;

use crate::error::{LogError, LogResult};

/// Every accepted form of the `file` option
#[derive(Debug, Clone)]
pub enum FileOption {
    /// Filesystem path, opened for appending
    Path(PathBuf),
    /// `file://` URL
    Url(Url),
    /// Raw path bytes
    Bytes(Vec<u8>),
    /// Already-open handle, used as-is
    Handle(Arc<File>),
}

impl FileOption {
    /// Parse a string option: `file://` URLs become `Url`, anything else a path
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "file" => Self::Url(url),
            _ => Self::Path(PathBuf::from(raw)),
        }
    }

    /// How the option is shown in error messages
    pub fn display(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Url(url) => url.to_string(),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Handle(file) => format!("{:?}", file),
        }
    }

    fn to_path(&self) -> Option<PathBuf> {
        match self {
            Self::Path(path) => Some(path.clone()),
            Self::Url(url) => url.to_file_path().ok(),
            Self::Bytes(bytes) => Some(path_from_bytes(bytes)),
            Self::Handle(_) => None,
        }
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

impl From<PathBuf> for FileOption {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for FileOption {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for FileOption {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Url> for FileOption {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<Vec<u8>> for FileOption {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Arc<File>> for FileOption {
    fn from(file: Arc<File>) -> Self {
        Self::Handle(file)
    }
}

impl From<File> for FileOption {
    fn from(file: File) -> Self {
        Self::Handle(Arc::new(file))
    }
}

/// Resolve the option to an open file handle
///
/// Paths are opened in append mode and created when missing. An existing
/// handle is returned unchanged. Any failure produces `LogError::OpenFailed`
/// naming the option as given.
pub fn open_log_file(option: &FileOption) -> LogResult<Arc<File>> {
    if let FileOption::Handle(file) = option {
        return Ok(file.clone());
    }

    let path = option
        .to_path()
        .ok_or_else(|| LogError::open_failed(option.display()))?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map(Arc::new)
        .map_err(|_| LogError::open_failed(option.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolves_path_to_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test-file.log");

        let file = open_log_file(&FileOption::from(path.clone())).unwrap();
        let mut handle: &File = &file;
        handle.write_all(b"written\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "written\n");
    }

    #[test]
    fn test_opens_in_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.log");
        std::fs::write(&path, "kept\n").unwrap();

        let file = open_log_file(&FileOption::from(path.as_path())).unwrap();
        let mut handle: &File = &file;
        handle.write_all(b"added\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kept\nadded\n");
    }

    #[test]
    fn test_resolves_path_bytes_to_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.log");
        let bytes = path.to_string_lossy().into_owned().into_bytes();

        assert!(open_log_file(&FileOption::from(bytes)).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_resolves_file_url_to_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("url.log");
        let url = Url::from_file_path(&path).unwrap();

        let option = FileOption::parse(url.as_str());
        assert!(matches!(option, FileOption::Url(_)));
        assert!(open_log_file(&option).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_uses_existing_handle() {
        let dir = tempfile::tempdir().unwrap();
        let file = Arc::new(File::create(dir.path().join("fd.log")).unwrap());

        let resolved = open_log_file(&FileOption::from(file.clone())).unwrap();
        assert!(Arc::ptr_eq(&file, &resolved));
    }

    #[test]
    fn test_fails_for_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        let invalid = dir.path().to_path_buf();

        let err = open_log_file(&FileOption::from(invalid.clone())).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Failed to open log file {}. Please check if the file path is valid and if the process has write permissions to the directory.",
                invalid.display()
            )
        );
    }

    #[test]
    fn test_parse_plain_path() {
        assert!(matches!(FileOption::parse("logs/chain.log"), FileOption::Path(_)));
        assert!(matches!(FileOption::parse("/tmp/chain.log"), FileOption::Path(_)));
    }
}
