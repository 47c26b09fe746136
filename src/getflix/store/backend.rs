use crate::error::{GetflixError, Result};
use crate::model::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Abstract interface for raw catalog I/O.
/// This trait handles the "how" of storage (file format, memory),
/// while MovieStore handles the "what" (duplicate policy, flush on mutation).
pub trait CatalogBackend {
    /// Load the whole catalog.
    /// Returns an empty catalog if the backing file does not exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<Catalog>;

    /// Replace the stored catalog with `catalog`.
    /// MUST NOT leave a truncated file behind on failure.
    fn save(&self, catalog: &Catalog) -> Result<()>;

    /// Where the catalog lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}

/// Write `content` to `path` through a temporary sibling file and a rename.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(GetflixError::Io)?;
    }

    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog");
    let tmp_path = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));

    fs::write(&tmp_path, content).map_err(GetflixError::Io)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(GetflixError::Io(e));
    }
    Ok(())
}

/// Read `path`, mapping a missing file to `None`.
pub(crate) fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GetflixError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_parent_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("movies.json");

        write_atomic(&target, b"{}").unwrap();
        write_atomic(&target, b"{\"a\": 1}").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "{\"a\": 1}");
        for entry in fs::read_dir(target.parent().unwrap()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_if_exists(&dir.path().join("nope.json")).unwrap(), None);
    }
}
