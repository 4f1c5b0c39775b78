use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SnippetStore;

use super::helpers::resolve_position;

/// Resolve a single snippet by its 1-based list position.
pub fn run<S: SnippetStore>(store: &S, position: usize) -> Result<CmdResult> {
    let snippet = resolve_position(store, position)?;
    Ok(CmdResult::default().with_affected(vec![snippet]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::SnippetDraft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn resolves_by_display_position() {
        let mut store = InMemoryStore::new();
        create::run(
            &mut store,
            SnippetDraft::new(Some("B".into()), Some("second".into()), None),
        )
        .unwrap();
        create::run(
            &mut store,
            SnippetDraft::new(Some("A".into()), Some("first".into()), None),
        )
        .unwrap();

        let result = run(&store, 1).unwrap();
        assert_eq!(result.affected[0].title, "first");
    }
}
