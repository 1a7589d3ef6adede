//! Application configuration.
//!
//! Centralized configuration for the leave-request frontend.
//! The client is served by the same host as the API, so the base URL is
//! empty and every endpoint is resolved relative to the page origin.

/// Backend API base URL.
///
/// Empty means same-origin.
pub const API_BASE_URL: &str = "";

/// Multipart submission endpoint.
pub const SUBMIT_PATH: &str = "/api/submit";

/// Date-ranged export endpoint (reached by navigation, not fetch).
pub const EXPORT_PATH: &str = "/api/export";

/// Server-rendered list of today's leave records.
pub const TODAY_PATH: &str = "/today";

/// Delay before a status message is cleared, in milliseconds.
pub const MESSAGE_CLEAR_DELAY_MS: u32 = 3_000;

// =============================================================================
// DOM contract
// =============================================================================

pub const LEAVE_FORM_ID: &str = "leaveForm";
pub const STUDENT_ID_INPUT: &str = "student_id";
pub const NAME_INPUT: &str = "name";
pub const REASON_INPUT: &str = "reason";
pub const PHOTO_INPUT: &str = "photo";
pub const LEAVE_DATE_INPUT: &str = "leave_date";
pub const START_DATE_INPUT: &str = "start_date";
pub const END_DATE_INPUT: &str = "end_date";
pub const MESSAGE_REGION_ID: &str = "message";

// =============================================================================
// User-facing texts
// =============================================================================

pub const SUBMIT_SUCCESS_TEXT: &str = "提交成功！";
pub const SUBMIT_FAILURE_TEXT: &str = "提交失败，请重试";
pub const EXPORT_MISSING_DATES_TEXT: &str = "请选择开始日期和结束日期";
