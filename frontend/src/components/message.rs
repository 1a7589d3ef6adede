//! Status message region.
//!
//! Rendered empty; the notifier writes into it directly through the DOM.

use leptos::*;

use crate::config::MESSAGE_REGION_ID;

#[component]
pub fn MessageRegion() -> impl IntoView {
    view! {
        <div id=MESSAGE_REGION_ID class="message"></div>
    }
}
