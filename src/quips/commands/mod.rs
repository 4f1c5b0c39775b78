use crate::model::Snippet;

pub mod clear;
pub mod create;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result returned by every command. The CLI turns this into
/// terminal output; other clients can consume it directly.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Snippets created, updated, removed, or resolved by the command.
    pub affected: Vec<Snippet>,
    /// Grouped listing (category → members), in lexicographic category order.
    pub groups: Vec<(String, Vec<Snippet>)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected = snippets;
        self
    }

    pub fn with_groups(mut self, groups: Vec<(String, Vec<Snippet>)>) -> Self {
        self.groups = groups;
        self
    }
}
