use error_stack::Report;
use google_sheets4::Error;
use serde_json::Value;

use crate::ports::sync_error::SyncError;

/// Maps a spreadsheet service failure onto the sync taxonomy. Statuses that say nothing
/// specific fall back to `fallback`, the category of the operation that failed.
pub fn classify(error: &Error, fallback: SyncError) -> SyncError {
    match error {
        Error::HttpError(_) | Error::Io(_) => SyncError::Connection,
        Error::MissingAPIKey | Error::MissingToken(_) => SyncError::Auth,
        Error::BadRequest(body) => error_code(body)
            .and_then(from_status)
            .unwrap_or(fallback),
        Error::Failure(response) => from_status(u64::from(response.status().as_u16()))
            .unwrap_or(fallback),
        _ => fallback,
    }
}

/// Wraps `error` in a report whose context is its classification.
pub fn remote_error(error: Error, fallback: SyncError) -> Report<SyncError> {
    let context = classify(&error, fallback);
    Report::new(error).change_context(context)
}

fn error_code(body: &Value) -> Option<u64> {
    body.get("error")?.get("code")?.as_u64()
}

fn from_status(status: u64) -> Option<SyncError> {
    match status {
        401 | 403 => Some(SyncError::Auth),
        404 => Some(SyncError::NotFound),
        _ => None,
    }
}
