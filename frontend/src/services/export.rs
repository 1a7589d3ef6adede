//! Date-ranged export.
//!
//! The export is a full-page navigation: the browser handles the response
//! (usually a ZIP download) itself.

use crate::config::{
    API_BASE_URL, END_DATE_INPUT, EXPORT_MISSING_DATES_TEXT, EXPORT_PATH, START_DATE_INPUT,
};
use crate::page::LeavePage;
use crate::services::show_message;
use crate::types::{AppError, AppResult, DateBound, MessageKind};

/// A complete export date range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportQuery {
    pub start_date: String,
    pub end_date: String,
}

impl ExportQuery {
    /// Build a query from raw input values. Both dates are required;
    /// surrounding whitespace is dropped.
    pub fn from_inputs(start_date: &str, end_date: &str) -> AppResult<Self> {
        let start_date = start_date.trim();
        let end_date = end_date.trim();
        if start_date.is_empty() {
            return Err(AppError::MissingDate(DateBound::Start));
        }
        if end_date.is_empty() {
            return Err(AppError::MissingDate(DateBound::End));
        }
        Ok(Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        })
    }

    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("start_date", &self.start_date)
            .append_pair("end_date", &self.end_date)
            .finish()
    }

    /// Export URL under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}?{}", base_url, EXPORT_PATH, self.query_string())
    }
}

/// Read the date range from the page and navigate to the export endpoint.
///
/// Returns the navigation target. With a date missing, shows an error
/// message and does not navigate.
pub fn export_records<P: LeavePage>(page: &P) -> AppResult<String> {
    let query = ExportQuery::from_inputs(
        &page.input_value(START_DATE_INPUT),
        &page.input_value(END_DATE_INPUT),
    );

    let query = match query {
        Ok(query) => query,
        Err(e) => {
            log::warn!("Export refused: {}", e);
            show_message(page, EXPORT_MISSING_DATES_TEXT, MessageKind::Error);
            return Err(e);
        }
    };

    let url = query.url(API_BASE_URL);
    log::info!("📦 Exporting records: {}", url);
    if let Err(e) = page.navigate(&url) {
        log::warn!("❌ Export navigation failed: {}", e);
        return Err(e);
    }

    Ok(url)
}
