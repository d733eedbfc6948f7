use crate::model::Document;
use crate::validate::Issue;

pub mod create;
pub mod delete;
pub mod doctor;
pub mod elements;
pub mod helpers;
pub mod list;
pub mod pages;
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

/// Structured result of a command: data plus user-facing messages, with no
/// formatting or I/O decisions baked in.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Documents created or mutated by the command, post-save.
    pub affected_documents: Vec<Document>,
    /// Documents fetched for display.
    pub listed_documents: Vec<Document>,
    /// Findings from validation-style commands.
    pub issues: Vec<Issue>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Fields of an element an editor can change after creation. `None` means
/// "leave as is". The element's kind is not here on purpose: changing a
/// text element into an image is remove + create, never an update.
#[derive(Debug, Clone, Default)]
pub struct ElementUpdate {
    pub content: Option<String>,
    pub x_pct: Option<f64>,
    pub y_pct: Option<f64>,
    pub width_pct: Option<f64>,
    pub height_pct: Option<f64>,
    pub font_size: Option<u32>,
}

impl ElementUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.x_pct.is_none()
            && self.y_pct.is_none()
            && self.width_pct.is_none()
            && self.height_pct.is_none()
            && self.font_size.is_none()
    }
}
