//! Leave-request submission.
//!
//! Reads the five form fields, posts them as one multipart request and
//! reports the outcome through the status notifier.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config::{
    API_BASE_URL, LEAVE_DATE_INPUT, NAME_INPUT, PHOTO_INPUT, REASON_INPUT, STUDENT_ID_INPUT,
    SUBMIT_FAILURE_TEXT, SUBMIT_PATH, SUBMIT_SUCCESS_TEXT,
};
use crate::page::{js_error_message, LeavePage};
use crate::services::show_message;
use crate::types::{AppError, AppResult, MessageKind};

/// Fields of one leave request, as typed by the user.
///
/// Nothing is validated client-side; empty values are sent as empty strings.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionPayload<P> {
    pub student_id: String,
    pub name: String,
    pub reason: String,
    pub photo: Option<P>,
    pub leave_date: String,
}

/// One multipart part.
#[derive(Debug, PartialEq)]
pub enum FormPart<'a, P> {
    Text(&'static str, &'a str),
    File(&'static str, &'a P),
}

impl<P> FormPart<'_, P> {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::Text(name, _) | FormPart::File(name, _) => *name,
        }
    }
}

impl<P> SubmissionPayload<P> {
    /// Snapshot the form fields of `page`.
    pub fn read_from<Pg>(page: &Pg) -> Self
    where
        Pg: LeavePage<Photo = P>,
    {
        Self {
            student_id: page.input_value(STUDENT_ID_INPUT),
            name: page.input_value(NAME_INPUT),
            reason: page.input_value(REASON_INPUT),
            photo: page.selected_photo(),
            leave_date: page.input_value(LEAVE_DATE_INPUT),
        }
    }

    /// Multipart parts in wire order. The photo part is left out when no
    /// file was chosen.
    pub fn parts(&self) -> Vec<FormPart<'_, P>> {
        let mut parts = vec![
            FormPart::Text(STUDENT_ID_INPUT, self.student_id.as_str()),
            FormPart::Text(NAME_INPUT, self.name.as_str()),
            FormPart::Text(REASON_INPUT, self.reason.as_str()),
        ];
        if let Some(photo) = &self.photo {
            parts.push(FormPart::File(PHOTO_INPUT, photo));
        }
        parts.push(FormPart::Text(LEAVE_DATE_INPUT, self.leave_date.as_str()));
        parts
    }
}

impl SubmissionPayload<File> {
    /// Build the browser multipart body.
    pub fn to_form_data(&self) -> AppResult<FormData> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Dom(format!("Failed to create FormData: {}", js_error_message(&e))))?;

        for part in self.parts() {
            let name = part.name();
            let appended = match part {
                FormPart::Text(_, value) => form_data.append_with_str(name, value),
                FormPart::File(_, file) => form_data.append_with_blob(name, file),
            };
            appended
                .map_err(|e| AppError::Dom(format!("Failed to append {}: {}", name, js_error_message(&e))))?;
        }

        Ok(form_data)
    }
}

/// Body returned by the submission endpoint.
///
/// Only logged; no field influences the outcome.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SubmitReceipt {
    pub status: Option<String>,
    pub message: Option<String>,
    pub photo_url: Option<String>,
}

/// The leave-request backend.
#[allow(async_fn_in_trait)]
pub trait LeaveApi {
    type Photo;

    /// Send one payload. A single attempt, no retry.
    async fn submit(&self, payload: SubmissionPayload<Self::Photo>) -> AppResult<SubmitReceipt>;
}

/// [`LeaveApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpLeaveApi {
    base_url: String,
}

impl HttpLeaveApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn submit_url(&self) -> String {
        format!("{}{}", self.base_url, SUBMIT_PATH)
    }
}

impl Default for HttpLeaveApi {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl LeaveApi for HttpLeaveApi {
    type Photo = File;

    async fn submit(&self, payload: SubmissionPayload<File>) -> AppResult<SubmitReceipt> {
        let form_data = payload.to_form_data()?;

        let url = self.submit_url();
        log::info!("📤 Submitting leave request to {}", url);

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        receipt_from(response.status(), &body)
    }
}

/// Classify a submission response.
///
/// Success needs both a 2xx status and a JSON body.
pub fn receipt_from(status: u16, body: &str) -> AppResult<SubmitReceipt> {
    if !(200..300).contains(&status) {
        return Err(AppError::Server {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

/// Submit the leave form on `page` through `api`.
///
/// On success the form is reset and a success message shown; on failure
/// the form is kept and a failure message shown.
pub async fn submit_leave<Pg, A>(page: &Pg, api: &A) -> AppResult<SubmitReceipt>
where
    Pg: LeavePage,
    A: LeaveApi<Photo = Pg::Photo>,
{
    let payload = SubmissionPayload::read_from(page);

    match api.submit(payload).await {
        Ok(receipt) => {
            log::debug!("Submit receipt: {:?}", receipt);
            page.reset_form();
            show_message(page, SUBMIT_SUCCESS_TEXT, MessageKind::Success);
            Ok(receipt)
        }
        Err(e) => {
            log::warn!("❌ Submission failed: {}", e);
            show_message(page, SUBMIT_FAILURE_TEXT, MessageKind::Error);
            Err(e)
        }
    }
}
