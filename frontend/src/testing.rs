//! In-memory doubles for the page and the backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::page::LeavePage;
use crate::services::{LeaveApi, SubmissionPayload, SubmitReceipt};
use crate::types::{AppError, AppResult};

#[derive(Default)]
struct PageState {
    inputs: HashMap<String, String>,
    photo: Option<String>,
    form_resets: usize,
    navigations: Vec<String>,
    navigation_error: Option<String>,
    message_text: String,
    message_class: String,
    now_ms: u64,
    timers: Vec<(u64, Box<dyn FnOnce()>)>,
}

/// Fake page with a manual clock. Photos are file names.
#[derive(Clone, Default)]
pub struct MockPage {
    state: Rc<RefCell<PageState>>,
}

impl MockPage {
    pub fn with_inputs(inputs: &[(&str, &str)]) -> Self {
        let page = Self::default();
        for (id, value) in inputs {
            page.set_input(id, value);
        }
        page
    }

    pub fn set_input(&self, id: &str, value: &str) {
        self.state
            .borrow_mut()
            .inputs
            .insert(id.to_string(), value.to_string());
    }

    pub fn set_photo(&self, name: &str) {
        self.state.borrow_mut().photo = Some(name.to_string());
    }

    /// Make every later navigation fail with `AppError::Dom(reason)`.
    pub fn fail_navigation(&self, reason: &str) {
        self.state.borrow_mut().navigation_error = Some(reason.to_string());
    }

    pub fn form_resets(&self) -> usize {
        self.state.borrow().form_resets
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.borrow().navigations.clone()
    }

    /// `(text, class)` of the message region.
    pub fn message(&self) -> (String, String) {
        let state = self.state.borrow();
        (state.message_text.clone(), state.message_class.clone())
    }

    /// Move the clock forward, firing due timers in order.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        loop {
            let task = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(i, _)| i);
                next.map(|i| {
                    let (due, task) = state.timers.remove(i);
                    state.now_ms = due;
                    task
                })
            };
            match task {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now_ms = target;
    }
}

impl LeavePage for MockPage {
    type Photo = String;

    fn input_value(&self, id: &str) -> String {
        self.state.borrow().inputs.get(id).cloned().unwrap_or_default()
    }

    fn selected_photo(&self) -> Option<String> {
        self.state.borrow().photo.clone()
    }

    fn reset_form(&self) {
        let mut state = self.state.borrow_mut();
        state.form_resets += 1;
        state.inputs.clear();
        state.photo = None;
    }

    fn navigate(&self, url: &str) -> AppResult<()> {
        let mut state = self.state.borrow_mut();
        if let Some(reason) = &state.navigation_error {
            return Err(AppError::Dom(reason.clone()));
        }
        state.navigations.push(url.to_string());
        Ok(())
    }

    fn write_message(&self, text: &str, class: &str) {
        let mut state = self.state.borrow_mut();
        state.message_text = text.to_string();
        state.message_class = class.to_string();
    }

    fn clear_message(&self) {
        self.state.borrow_mut().message_text.clear();
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due = state.now_ms + u64::from(delay_ms);
        state.timers.push((due, task));
    }
}

/// Backend double that records every payload it receives.
pub struct MockApi {
    outcome: AppResult<SubmitReceipt>,
    calls: RefCell<Vec<SubmissionPayload<String>>>,
}

impl MockApi {
    pub fn returning(outcome: AppResult<SubmitReceipt>) -> Self {
        Self {
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SubmissionPayload<String>> {
        self.calls.borrow().clone()
    }
}

impl LeaveApi for MockApi {
    type Photo = String;

    async fn submit(&self, payload: SubmissionPayload<String>) -> AppResult<SubmitReceipt> {
        self.calls.borrow_mut().push(payload);
        self.outcome.clone()
    }
}
