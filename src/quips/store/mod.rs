//! # Storage Layer
//!
//! The [`SnippetStore`] trait abstracts the one durable slot that holds the
//! whole collection, so the command layer can run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage. The entire collection lives in a
//!   single pretty-printed JSON document (`snippets.json`), rewritten whole
//!   on every save.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. Models slot
//!   absence explicitly so `clear` semantics are observable.
//!
//! ## Failure Model
//!
//! A missing slot loads as an empty collection. A slot that exists but fails
//! to parse also loads as empty; the failure is logged at warn level and is
//! never fatal. Write failures surface as errors to the caller.

use crate::error::Result;
use crate::model::Snippet;

pub mod fs;
pub mod memory;

/// Abstract interface over the persisted snippet collection.
pub trait SnippetStore {
    /// Read the persisted collection. Missing or unparseable state yields an
    /// empty collection.
    fn load(&self) -> Result<Vec<Snippet>>;

    /// Persist the full collection, overwriting prior state.
    fn save(&mut self, snippets: &[Snippet]) -> Result<()>;

    /// Remove the persisted slot entirely (not the same as saving an empty
    /// collection).
    fn clear(&mut self) -> Result<()>;

    /// Whether the persisted slot currently exists.
    fn slot_exists(&self) -> bool;
}

/// The canonical serialization of a collection. Used by both persistence and
/// export so the two are byte-identical in shape.
pub fn serialize_collection(snippets: &[Snippet]) -> Result<String> {
    Ok(serde_json::to_string_pretty(snippets)?)
}
