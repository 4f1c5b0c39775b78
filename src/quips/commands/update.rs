use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SnippetDraft;
use crate::store::SnippetStore;
use uuid::Uuid;

/// Full-record replace by id. A missing id is a no-op, reported as a
/// warning rather than an error.
pub fn run<S: SnippetStore>(store: &mut S, id: Uuid, draft: SnippetDraft) -> Result<CmdResult> {
    let mut snippets = store.load()?;
    let mut result = CmdResult::default();

    match snippets.iter().position(|s| s.id == id) {
        Some(pos) => {
            snippets[pos].replace_with(draft);
            let updated = snippets[pos].clone();
            store.save(&snippets)?;
            result.add_message(CmdMessage::success(format!("Updated \"{}\"", updated.title)));
            result.affected.push(updated);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No snippet with id {}", id)));
        }
    }

    Ok(result)
}
