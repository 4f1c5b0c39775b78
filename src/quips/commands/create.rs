use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Snippet, SnippetDraft};
use crate::store::SnippetStore;

pub fn run<S: SnippetStore>(store: &mut S, draft: SnippetDraft) -> Result<CmdResult> {
    let mut snippets = store.load()?;
    let snippet = Snippet::new(draft);
    snippets.push(snippet.clone());
    store.save(&snippets)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" to {}",
        snippet.title, snippet.category
    )));
    result.affected.push(snippet);
    Ok(result)
}
