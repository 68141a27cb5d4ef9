use thiserror::Error;

/// Why a sync run could not complete. The underlying cause travels as attachments on the
/// `error_stack::Report` carrying this context.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    /// The database could not be opened or queried, or the spreadsheet service could not
    /// be reached.
    #[error("could not read the source table or reach the spreadsheet service")]
    Connection,
    #[error("spreadsheet service rejected the credentials")]
    Auth,
    #[error("spreadsheet or worksheet not found")]
    NotFound,
    #[error("spreadsheet update failed")]
    Write,
}

pub type SyncResult<T> = error_stack::Result<T, SyncError>;
