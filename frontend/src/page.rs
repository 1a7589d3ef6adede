//! The hosting page as seen by the flows.
//!
//! [`LeavePage`] is everything the submission, export and notifier code
//! needs from the browser. [`DomPage`] is the real implementation, looking
//! elements up by the ids listed in [`crate::config`].

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, File, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::{LEAVE_FORM_ID, MESSAGE_REGION_ID, PHOTO_INPUT};
use crate::types::{AppError, AppResult};

/// Operations the client performs on the hosting page.
///
/// Implementors must be cheap to clone: the notifier moves a clone into its
/// delayed clear.
pub trait LeavePage: Clone + 'static {
    /// Handle to the selected upload.
    type Photo;

    /// Current value of a text, date or textarea input; empty if absent.
    fn input_value(&self, id: &str) -> String;

    /// First file chosen in the photo input, if any.
    fn selected_photo(&self) -> Option<Self::Photo>;

    /// Reset the leave form to its initial values.
    fn reset_form(&self);

    /// Full-page navigation to `url`.
    fn navigate(&self, url: &str) -> AppResult<()>;

    /// Replace the message region's text and class.
    fn write_message(&self, text: &str, class: &str);

    /// Empty the message region's text, keeping its class.
    fn clear_message(&self);

    /// Run `task` once after `delay_ms`. There is no way to cancel it.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// [`LeavePage`] backed by the live browser document.
#[derive(Clone, Debug)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new() -> Self {
        Self {
            document: gloo_utils::document(),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("⚠️  Element #{} not found on page", id);
        }
        element
    }
}

impl Default for DomPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LeavePage for DomPage {
    type Photo = File;

    fn input_value(&self, id: &str) -> String {
        let Some(element) = self.element(id) else {
            return String::new();
        };

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            log::warn!("⚠️  #{} is not an input element", id);
            String::new()
        }
    }

    fn selected_photo(&self) -> Option<File> {
        self.element(PHOTO_INPUT)?
            .dyn_into::<HtmlInputElement>()
            .ok()?
            .files()?
            .get(0)
    }

    fn reset_form(&self) {
        if let Some(form) = self
            .element(LEAVE_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn navigate(&self, url: &str) -> AppResult<()> {
        gloo_utils::window()
            .location()
            .set_href(url)
            .map_err(|e| AppError::Dom(format!("Navigation to {} failed: {}", url, js_error_message(&e))))
    }

    fn write_message(&self, text: &str, class: &str) {
        if let Some(region) = self.element(MESSAGE_REGION_ID) {
            region.set_class_name(class);
            region.set_text_content(Some(text));
        }
    }

    fn clear_message(&self) {
        if let Some(region) = self.element(MESSAGE_REGION_ID) {
            region.set_text_content(Some(""));
        }
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
