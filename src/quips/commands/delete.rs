use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;
use uuid::Uuid;

use super::helpers::confirm;

pub fn run<S: SnippetStore>(store: &mut S, id: Uuid, skip_confirm: bool) -> Result<CmdResult> {
    let mut snippets = store.load()?;
    let mut result = CmdResult::default();

    // 1. Resolve the target
    let pos = match snippets.iter().position(|s| s.id == id) {
        Some(pos) => pos,
        None => {
            result.add_message(CmdMessage::warning(format!("No snippet with id {}", id)));
            return Ok(result);
        }
    };

    // 2. Confirm
    if !skip_confirm
        && !confirm(&format!(
            "This will permanently remove \"{}\".",
            snippets[pos].title
        ))?
    {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    // 3. Remove and persist
    let removed = snippets.remove(pos);
    store.save(&snippets)?;
    result.add_message(CmdMessage::success(format!("Deleted \"{}\"", removed.title)));
    result.affected.push(removed);
    Ok(result)
}
