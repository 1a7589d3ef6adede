//! UI Components for the leave-request page.
//!
//! # Layout Components
//! - [`Header`] - Page title and link to today's records
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`LeaveForm`] - Leave-request form with photo upload
//! - [`ExportPanel`] - Date range export
//! - [`MessageRegion`] - Target of the status notifier

mod header;
mod leave_form;
mod export_panel;
mod message;
mod footer;

pub use header::*;
pub use leave_form::*;
pub use export_panel::*;
pub use message::*;
pub use footer::*;
