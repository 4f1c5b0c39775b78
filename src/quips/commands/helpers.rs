use crate::error::{QuipsError, Result};
use crate::model::Snippet;
use crate::query;
use crate::store::SnippetStore;
use std::io::{self, Write};

/// Snippets in the order the list view shows them: categories sorted,
/// collection order within each category.
pub fn display_order<S: SnippetStore>(store: &S) -> Result<Vec<Snippet>> {
    let snippets = store.load()?;
    Ok(query::display_order(&snippets, ""))
}

/// Resolve a 1-based list position to its snippet.
pub fn resolve_position<S: SnippetStore>(store: &S, position: usize) -> Result<Snippet> {
    let ordered = display_order(store)?;
    if position == 0 || position > ordered.len() {
        return Err(QuipsError::Api(format!(
            "No snippet at position {} (have {})",
            position,
            ordered.len()
        )));
    }
    Ok(ordered[position - 1].clone())
}

/// Destructive-action gate: prints the prompt and requires an explicit `Y`.
pub fn confirm(prompt: &str) -> Result<bool> {
    println!("{}", prompt);
    print!("[Y] To confirm: ");
    io::stdout().flush().map_err(QuipsError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(QuipsError::Io)?;
    Ok(input.trim() == "Y")
}
