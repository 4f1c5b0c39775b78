use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

use super::helpers::confirm;

/// Empties the collection and removes the persisted slot entirely.
pub fn run<S: SnippetStore>(store: &mut S, skip_confirm: bool) -> Result<CmdResult> {
    let snippets = store.load()?;
    let mut result = CmdResult::default();

    if !skip_confirm
        && !confirm(&format!(
            "This will permanently remove all {} snippets.",
            snippets.len()
        ))?
    {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    store.clear()?;
    result.add_message(CmdMessage::success(format!(
        "Removed {} snippets.",
        snippets.len()
    )));
    Ok(result)
}
