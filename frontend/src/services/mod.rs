//! Backend communication and page-level flows.
//!
//! # Services
//!
//! - [`submit`] - Multipart leave-request submission to `/api/submit`
//! - [`export`] - Date-ranged export by navigation to `/api/export`
//! - [`notifier`] - Transient status messages

pub mod submit;
pub mod export;
pub mod notifier;

pub use submit::*;
pub use export::*;
pub use notifier::*;
