//! UI/backend events and error modeling for the admin GUI controller.

use admin_core::LoadError;
use shared::{domain::Member, error::ErrorCode};

pub enum UiEvent {
    Info(String),
    MembersLoaded {
        members: Vec<Member>,
        /// Feed entries dropped at the parse boundary.
        rejected: usize,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    NotFound,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadMembers,
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Network",
        UiErrorCategory::NotFound => "Not found",
        UiErrorCategory::Validation => "Invalid data",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("404") || message_lower.contains("not found") {
            UiErrorCategory::NotFound
        } else if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("dns")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_load_error(err: &LoadError) -> Self {
        let category = match err.code() {
            ErrorCode::Transport => UiErrorCategory::Transport,
            ErrorCode::NotFound => UiErrorCategory::NotFound,
            ErrorCode::Validation => UiErrorCategory::Validation,
            ErrorCode::Internal => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context: UiErrorContext::LoadMembers,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text for the status line and error banner.
    pub fn display_text(&self) -> String {
        match self.context {
            UiErrorContext::LoadMembers => format!(
                "Could not load members ({}): {}",
                err_label(self.category),
                self.message
            ),
            UiErrorContext::BackendStartup => {
                format!("{} error: {}", err_label(self.category), self.message)
            }
        }
    }
}
