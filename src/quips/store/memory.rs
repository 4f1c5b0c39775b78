use super::SnippetStore;
use crate::error::Result;
use crate::model::Snippet;

/// In-memory storage for testing. Does NOT persist data.
///
/// The slot is `None` until the first save, mirroring how the file backend
/// distinguishes an absent slot from an empty one.
#[derive(Default)]
pub struct InMemoryStore {
    slot: Option<Vec<Snippet>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnippetStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Snippet>> {
        Ok(self.slot.clone().unwrap_or_default())
    }

    fn save(&mut self, snippets: &[Snippet]) -> Result<()> {
        self.slot = Some(snippets.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }

    fn slot_exists(&self) -> bool {
        self.slot.is_some()
    }
}
