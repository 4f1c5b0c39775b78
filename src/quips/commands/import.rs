use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuipsError, Result};
use crate::model::{Snippet, SnippetDraft};
use crate::store::SnippetStore;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// Batch-import snippets from a tabular file.
///
/// Column order is fixed: [category, title, content]. The first row is
/// assumed to be a header and discarded, rows with fewer than 3 cells are
/// discarded, extra columns are ignored. Import is additive; with zero
/// valid rows the collection is left untouched and nothing is written.
pub fn run<S: SnippetStore>(store: &mut S, path: &Path, delimiter: u8) -> Result<CmdResult> {
    let file = File::open(path).map_err(QuipsError::Io)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file);

    let mut imported = Vec::new();
    for record in reader.records() {
        // A parse failure aborts the whole import; the collection is
        // untouched because nothing has been saved yet.
        let record = record?;
        if record.len() < 3 {
            continue;
        }
        imported.push(snippet_from_row(&record));
    }

    let mut result = CmdResult::default();
    if imported.is_empty() {
        result.add_message(CmdMessage::info("No rows to import."));
        return Ok(result);
    }

    let mut snippets = store.load()?;
    snippets.extend(imported.iter().cloned());
    store.save(&snippets)?;

    result.add_message(CmdMessage::success(format!(
        "Imported {} snippets from {}",
        imported.len(),
        path.display()
    )));
    result.affected = imported;
    Ok(result)
}

fn snippet_from_row(record: &StringRecord) -> Snippet {
    Snippet::new(SnippetDraft::new(
        record.get(0).map(|cell| cell.trim().to_string()),
        record.get(1).map(|cell| cell.trim().to_string()),
        record.get(2).map(|cell| cell.trim().to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FALLBACK_CATEGORY, FALLBACK_TITLE};
    use crate::store::memory::InMemoryStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn imports_rows_after_the_header() {
        let file = csv_file("category,title,content\nSales,Greeting,Hello!\n,,\n");
        let mut store = InMemoryStore::new();

        let result = run(&mut store, file.path(), b',').unwrap();
        assert_eq!(result.affected.len(), 2);

        let snippets = store.load().unwrap();
        assert_eq!(snippets[0].category, "Sales");
        assert_eq!(snippets[0].title, "Greeting");
        assert_eq!(snippets[0].content, "Hello!");

        // A row of three empty cells still imports, with fallback labels.
        assert_eq!(snippets[1].category, FALLBACK_CATEGORY);
        assert_eq!(snippets[1].title, FALLBACK_TITLE);
        assert_eq!(snippets[1].content, "");
    }

    #[test]
    fn short_rows_are_discarded() {
        let file = csv_file("category,title,content\nSales,OnlyTwo\nSupport,Refund,Sorry\n");
        let mut store = InMemoryStore::new();

        let result = run(&mut store, file.path(), b',').unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].title, "Refund");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = csv_file("a,b,c,d\nSales,Greeting,Hello!,ignored,also ignored\n");
        let mut store = InMemoryStore::new();

        run(&mut store, file.path(), b',').unwrap();
        let snippets = store.load().unwrap();
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].content, "Hello!");
    }

    #[test]
    fn cells_are_trimmed() {
        let file = csv_file("a,b,c\n Sales , Greeting ,  Hello!  \n");
        let mut store = InMemoryStore::new();

        run(&mut store, file.path(), b',').unwrap();
        let snippet = &store.load().unwrap()[0];
        assert_eq!(snippet.category, "Sales");
        assert_eq!(snippet.title, "Greeting");
        assert_eq!(snippet.content, "Hello!");
    }

    #[test]
    fn import_is_additive() {
        let mut store = InMemoryStore::new();
        let first = csv_file("a,b,c\nSales,One,1\n");
        let second = csv_file("a,b,c\nSupport,Two,2\n");

        run(&mut store, first.path(), b',').unwrap();
        run(&mut store, second.path(), b',').unwrap();

        let snippets = store.load().unwrap();
        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].title, "One");
        assert_eq!(snippets[1].title, "Two");
    }

    #[test]
    fn zero_valid_rows_writes_nothing() {
        let file = csv_file("category,title,content\nshort,row\n");
        let mut store = InMemoryStore::new();

        let result = run(&mut store, file.path(), b',').unwrap();
        assert!(result.affected.is_empty());
        assert!(!store.slot_exists());
    }

    #[test]
    fn unreadable_file_leaves_data_untouched() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a,b,c\n\xff\xfe,bad,utf8\n").unwrap();
        let mut store = InMemoryStore::new();

        assert!(run(&mut store, file.path(), b',').is_err());
        assert!(!store.slot_exists());
    }

    #[test]
    fn custom_delimiter() {
        let file = csv_file("a;b;c\nSales;Greeting;Hello!\n");
        let mut store = InMemoryStore::new();

        run(&mut store, file.path(), b';').unwrap();
        assert_eq!(store.load().unwrap()[0].title, "Greeting");
    }
}
