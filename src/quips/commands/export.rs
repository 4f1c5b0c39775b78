use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuipsError, Result};
use crate::store::{serialize_collection, SnippetStore};
use std::fs;
use std::path::Path;

/// Write the full collection to `target` using the persistence
/// serialization, so the export round-trips through `load`.
pub fn run<S: SnippetStore>(store: &S, target: &Path) -> Result<CmdResult> {
    let snippets = store.load()?;
    let payload = serialize_collection(&snippets)?;
    fs::write(target, payload).map_err(QuipsError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} snippets to {}",
        snippets.len(),
        target.display()
    )));
    Ok(result)
}
