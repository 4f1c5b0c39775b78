use super::{serialize_collection, SnippetStore};
use crate::error::{QuipsError, Result};
use crate::model::Snippet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DATA_FILENAME: &str = "snippets.json";

/// File-backed store: the whole collection in one JSON document under the
/// data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(QuipsError::Io)?;
        }
        Ok(())
    }

    fn read_collection(&self, path: &Path) -> Result<Vec<Snippet>> {
        let content = fs::read_to_string(path).map_err(QuipsError::Io)?;
        match serde_json::from_str(&content) {
            Ok(snippets) => Ok(snippets),
            Err(e) => {
                // Corrupt state must never block startup.
                warn!("ignoring unparseable snippet data at {}: {}", path.display(), e);
                Ok(Vec::new())
            }
        }
    }
}

impl SnippetStore for FileStore {
    fn load(&self) -> Result<Vec<Snippet>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        self.read_collection(&path)
    }

    fn save(&mut self, snippets: &[Snippet]) -> Result<()> {
        self.ensure_dir()?;
        let content = serialize_collection(snippets)?;
        fs::write(self.data_path(), content).map_err(QuipsError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.data_path();
        if path.exists() {
            fs::remove_file(path).map_err(QuipsError::Io)?;
        }
        Ok(())
    }

    fn slot_exists(&self) -> bool {
        self.data_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnippetDraft;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn load_missing_slot_is_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
        assert!(!store.slot_exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, mut store) = setup();
        let snippets = vec![
            Snippet::new(SnippetDraft::new(
                Some("Sales".into()),
                Some("Greeting".into()),
                Some("Hello!".into()),
            )),
            Snippet::new(SnippetDraft::default()),
        ];

        store.save(&snippets).unwrap();
        assert_eq!(store.load().unwrap(), snippets);
    }

    #[test]
    fn empty_collection_round_trips() {
        let (_dir, mut store) = setup();
        store.save(&[]).unwrap();
        assert!(store.slot_exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn unparseable_slot_loads_as_empty() {
        let (dir, store) = setup();
        fs::write(dir.path().join(DATA_FILENAME), "{not json").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn clear_removes_the_slot_file() {
        let (dir, mut store) = setup();
        store.save(&[Snippet::new(SnippetDraft::default())]).unwrap();
        assert!(store.slot_exists());

        store.clear().unwrap();
        assert!(!store.slot_exists());
        assert!(!dir.path().join(DATA_FILENAME).exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn clear_on_missing_slot_is_a_no_op() {
        let (_dir, mut store) = setup();
        store.clear().unwrap();
        assert!(!store.slot_exists());
    }
}
