//! Qingjia - Leave-request frontend (Rust/Leptos)
//!
//! A WebAssembly client for the student leave-request page: it posts the
//! leave form as a multipart request and sends the browser to the
//! date-ranged export.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title, link to today's records)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── LeaveForm     -> services::submit_leave                 │
//! │  ├── ExportPanel   -> services::export_records               │
//! │  └── MessageRegion <- services::show_message                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (MessageKind, AppError, etc.)
//! - [`page`] - The hosting page seam and its DOM implementation
//! - [`components`] - UI components
//! - [`services`] - Submission, export and notifier flows

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod page;
pub mod components;
pub mod services;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{AppError, AppResult, DateBound, MessageKind};

pub use page::{DomPage, LeavePage};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic and console logging hooks, then mount the app.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Qingjia - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="学生请假申请"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <LeaveForm/>
            <MessageRegion/>
            <ExportPanel/>
        </div>

        <Footer/>
    }
}
