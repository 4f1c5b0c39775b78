//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all quips operations, regardless of the UI driving them.
//!
//! It dispatches to command functions, normalizes inputs (1-based list
//! positions become snippet ids), and returns structured `Result` types.
//! Business logic lives in `commands/*.rs`; presentation lives with the
//! client. `QuipsApi<S: SnippetStore>` is generic over the storage backend
//! so the whole facade runs against `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::SnippetDraft;
use crate::store::SnippetStore;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct QuipsApi<S: SnippetStore> {
    store: S,
}

impl<S: SnippetStore> QuipsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_snippet(&mut self, draft: SnippetDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_snippets(&self, term: &str) -> Result<CmdResult> {
        commands::list::run(&self.store, term)
    }

    pub fn view_snippet(&self, position: usize) -> Result<CmdResult> {
        commands::view::run(&self.store, position)
    }

    pub fn edit_snippet(&mut self, position: usize, draft: SnippetDraft) -> Result<CmdResult> {
        let snippet = commands::helpers::resolve_position(&self.store, position)?;
        commands::update::run(&mut self.store, snippet.id, draft)
    }

    pub fn delete_snippet(&mut self, position: usize, skip_confirm: bool) -> Result<CmdResult> {
        let snippet = commands::helpers::resolve_position(&self.store, position)?;
        commands::delete::run(&mut self.store, snippet.id, skip_confirm)
    }

    pub fn clear_snippets(&mut self, skip_confirm: bool) -> Result<CmdResult> {
        commands::clear::run(&mut self.store, skip_confirm)
    }

    pub fn import_snippets(&mut self, path: &Path, delimiter: u8) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path, delimiter)
    }

    pub fn export_snippets(&self, target: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, target)
    }
}
