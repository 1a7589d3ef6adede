//! Header component

use leptos::*;

use crate::config::TODAY_PATH;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <h1>"学生请假申请"</h1>
            <a href=TODAY_PATH class="header-link">"今日请假名单"</a>
        </header>
    }
}
