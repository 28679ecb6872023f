use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

// Named binary blobs in a flat directory, one file per key. The whole value
// is rewritten on every write; there is a single writer by construction.
#[derive(Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStorage { root: root.into() }
    }

    pub fn read(&self, key: &str) -> Result<Option<Vec<u8>>, String> {
        match fs::read(self.entry_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read entry {key}: {err}")),
        }
    }

    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<(), String> {
        fs::create_dir_all(&self.root)
            .map_err(|err| format!("Failed to create storage dir: {err}"))?;

        fs::write(self.entry_path(key), bytes)
            .map_err(|err| format!("Failed to write entry {key}: {err}"))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entry_path(key).is_file()
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert_eq!(storage.read("absent"), Ok(None));
        assert!(!storage.contains("absent"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write("entry", b"payload").unwrap();

        assert!(storage.contains("entry"));
        assert_eq!(storage.read("entry"), Ok(Some(b"payload".to_vec())));
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write("entry", b"a longer first value").unwrap();
        storage.write("entry", b"short").unwrap();

        assert_eq!(storage.read("entry"), Ok(Some(b"short".to_vec())));
    }

    #[test]
    fn test_write_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("nested").join("store"));

        storage.write("entry", b"payload").unwrap();

        assert_eq!(storage.read("entry"), Ok(Some(b"payload".to_vec())));
    }
}
