//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Message Types** - Status notifier categories
//! - **Error Types** - Frontend error handling

use std::fmt;
use thiserror::Error;

// =============================================================================
// Message Types
// =============================================================================

/// Category of a status message.
///
/// Drives the presentation class of the message region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// Operation completed
    Success,
    /// Operation failed or was refused
    Error,
}

impl MessageKind {
    /// Get the CSS class list for the message region.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// One end of the export date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::Start => f.write_str("start_date"),
            DateBound::End => f.write_str("end_date"),
        }
    }
}

/// Frontend application errors.
///
/// Every variant ends up as the same transient message for the user;
/// the distinction only shows in the console log.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// The request could not be sent or did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A browser API call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// A required export date was left empty.
    #[error("Missing export date: {0}")]
    MissingDate(DateBound),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
