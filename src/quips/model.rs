use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category applied when none is given.
pub const FALLBACK_CATEGORY: &str = "General";
/// Title applied when none is given.
pub const FALLBACK_TITLE: &str = "Untitled";

/// A single reusable text entry. The collection is an ordered `Vec<Snippet>`
/// and this struct is exactly the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    pub content: String,
}

/// User-supplied fields for creating or replacing a snippet. Missing or
/// blank category/title fall back to the default labels.
#[derive(Debug, Clone, Default)]
pub struct SnippetDraft {
    pub category: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SnippetDraft {
    pub fn new(category: Option<String>, title: Option<String>, content: Option<String>) -> Self {
        Self {
            category,
            title,
            content,
        }
    }
}

impl Snippet {
    pub fn new(draft: SnippetDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: label_or(draft.category, FALLBACK_CATEGORY),
            title: label_or(draft.title, FALLBACK_TITLE),
            content: draft.content.unwrap_or_default(),
        }
    }

    /// Full-record replace: every field except `id` is taken from the draft,
    /// with the same fallback rules as creation.
    pub fn replace_with(&mut self, draft: SnippetDraft) {
        self.category = label_or(draft.category, FALLBACK_CATEGORY);
        self.title = label_or(draft.title, FALLBACK_TITLE);
        self.content = draft.content.unwrap_or_default();
    }
}

fn label_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_fallback_labels() {
        let snippet = Snippet::new(SnippetDraft::default());
        assert_eq!(snippet.category, FALLBACK_CATEGORY);
        assert_eq!(snippet.title, FALLBACK_TITLE);
        assert_eq!(snippet.content, "");
    }

    #[test]
    fn new_trims_labels() {
        let draft = SnippetDraft::new(
            Some("  Sales ".into()),
            Some(" Greeting".into()),
            Some("Hello!".into()),
        );
        let snippet = Snippet::new(draft);
        assert_eq!(snippet.category, "Sales");
        assert_eq!(snippet.title, "Greeting");
        assert_eq!(snippet.content, "Hello!");
    }

    #[test]
    fn blank_labels_fall_back() {
        let draft = SnippetDraft::new(Some("   ".into()), Some("".into()), None);
        let snippet = Snippet::new(draft);
        assert_eq!(snippet.category, FALLBACK_CATEGORY);
        assert_eq!(snippet.title, FALLBACK_TITLE);
    }

    #[test]
    fn replace_with_keeps_id() {
        let mut snippet = Snippet::new(SnippetDraft::new(
            Some("Sales".into()),
            Some("Greeting".into()),
            Some("Hello!".into()),
        ));
        let id = snippet.id;
        snippet.replace_with(SnippetDraft::new(None, Some("Farewell".into()), None));
        assert_eq!(snippet.id, id);
        assert_eq!(snippet.category, FALLBACK_CATEGORY);
        assert_eq!(snippet.title, "Farewell");
        assert_eq!(snippet.content, "");
    }

    #[test]
    fn ids_are_unique_across_creations() {
        let a = Snippet::new(SnippetDraft::default());
        let b = Snippet::new(SnippetDraft::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serialized_shape_is_flat() {
        let snippet = Snippet::new(SnippetDraft::new(
            Some("Sales".into()),
            Some("Greeting".into()),
            Some("Hello!".into()),
        ));
        let json = serde_json::to_value(&snippet).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["category", "content", "id", "title"]);
    }
}
