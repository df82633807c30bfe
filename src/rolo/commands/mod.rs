use crate::model::{PhoneNumber, Record};

pub mod add;
pub mod birthday;
pub mod change;
pub mod delete_phone;
pub mod list;
pub mod phones;
pub mod remove;
pub mod search;

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

/// Structured outcome of a command. The core never prints; whatever the
/// UI layer is, it renders from these fields.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records the command touched (added, changed, removed).
    pub affected: Vec<Record>,
    /// Records to display (search hits, one page of a listing).
    pub listed: Vec<Record>,
    /// Phone list of a single looked-up contact.
    pub phones: Vec<PhoneNumber>,
    /// Whole days until the next birthday occurrence, when asked for.
    pub days_until: Option<i64>,
    /// Set by the listing command when more pages follow this one.
    pub more_pages: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_phones(mut self, phones: Vec<PhoneNumber>) -> Self {
        self.phones = phones;
        self
    }
}
