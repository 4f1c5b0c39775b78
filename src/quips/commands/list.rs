use crate::commands::CmdResult;
use crate::error::Result;
use crate::query;
use crate::store::SnippetStore;

/// Filter by term (empty matches everything), then group by category.
pub fn run<S: SnippetStore>(store: &S, term: &str) -> Result<CmdResult> {
    let snippets = store.load()?;
    let groups = query::group_by_category(query::filter(&snippets, term));
    Ok(CmdResult::default().with_groups(groups.into_iter().collect()))
}
