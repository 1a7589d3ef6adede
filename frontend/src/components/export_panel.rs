//! Export panel: pick a date range and download the records.

use leptos::*;

use crate::config::{END_DATE_INPUT, START_DATE_INPUT};
use crate::page::DomPage;
use crate::services::export_records;

#[component]
pub fn ExportPanel() -> impl IntoView {
    let on_export = move |_| {
        if let Err(e) = export_records(&DomPage::new()) {
            log::debug!("Export not started: {}", e);
        }
    };

    view! {
        <section class="export-panel">
            <h2>"导出请假记录"</h2>
            <div class="date-range">
                <label for=START_DATE_INPUT>"开始日期"</label>
                <input type="date" id=START_DATE_INPUT/>
                <label for=END_DATE_INPUT>"结束日期"</label>
                <input type="date" id=END_DATE_INPUT/>
            </div>
            <button type="button" class="export-button" on:click=on_export>
                "导出"
            </button>
        </section>
    }
}
