//! Leave-request form.
//!
//! The inputs are uncontrolled: values are read from the DOM by id when the
//! form is submitted, and a successful submission resets the form element.

use leptos::*;
use leptos::ev::SubmitEvent;

use crate::config::{
    LEAVE_DATE_INPUT, LEAVE_FORM_ID, NAME_INPUT, PHOTO_INPUT, REASON_INPUT, STUDENT_ID_INPUT,
};
use crate::page::DomPage;
use crate::services::{submit_leave, HttpLeaveApi};

/// Claim the in-flight flag. Returns `false` while a submission is running.
pub(crate) fn begin_submission(is_submitting: RwSignal<bool>) -> bool {
    if is_submitting.get_untracked() {
        return false;
    }
    is_submitting.set(true);
    true
}

#[component]
pub fn LeaveForm() -> impl IntoView {
    let is_submitting = create_rw_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        // Keep the browser from posting the form itself
        ev.prevent_default();

        if !begin_submission(is_submitting) {
            return;
        }

        spawn_local(async move {
            let page = DomPage::new();
            let api = HttpLeaveApi::default();
            if let Ok(receipt) = submit_leave(&page, &api).await {
                if let Some(url) = receipt.photo_url {
                    log::info!("✅ Photo stored at {}", url);
                }
            }

            is_submitting.set(false);
        });
    };

    view! {
        <form id=LEAVE_FORM_ID class="leave-form" on:submit=on_submit>
            <div class="form-group">
                <label for=STUDENT_ID_INPUT>"学号"</label>
                <input type="text" id=STUDENT_ID_INPUT name=STUDENT_ID_INPUT/>
            </div>
            <div class="form-group">
                <label for=NAME_INPUT>"姓名"</label>
                <input type="text" id=NAME_INPUT name=NAME_INPUT/>
            </div>
            <div class="form-group">
                <label for=REASON_INPUT>"请假原因"</label>
                <textarea id=REASON_INPUT name=REASON_INPUT rows="4"></textarea>
            </div>
            <div class="form-group">
                <label for=PHOTO_INPUT>"假条照片"</label>
                <input type="file" id=PHOTO_INPUT name=PHOTO_INPUT accept=".png,.jpg,.jpeg"/>
            </div>
            <div class="form-group">
                <label for=LEAVE_DATE_INPUT>"请假日期"</label>
                <input type="date" id=LEAVE_DATE_INPUT name=LEAVE_DATE_INPUT/>
            </div>
            <button type="submit" class="submit-button" disabled=move || is_submitting.get()>
                {move || if is_submitting.get() { "⏳ 提交中..." } else { "提交申请" }}
            </button>
        </form>
    }
}
