use crate::domain::{sheets::format::FormatRequest, table::RowSet};

use super::sync_error::SyncResult;

/// Opens the target worksheet on the spreadsheet service.
#[async_trait::async_trait]
pub trait SheetClient: Send + Sync {
    type Sink: SheetSink;

    /// Authenticates, opens the spreadsheet and resolves the worksheet by its exact title.
    /// Fails with `SyncError::Auth` or `SyncError::NotFound`.
    async fn open_worksheet(&self) -> SyncResult<Self::Sink>;
}

/// Mutations applied to one opened worksheet. Every operation fails with
/// `SyncError::Write` unless the service reports a more specific cause.
#[async_trait::async_trait]
pub trait SheetSink: Send + Sync {
    /// Removes every user-entered format from the whole worksheet.
    async fn clear_formatting(&self) -> SyncResult<()>;

    /// Removes every cell value from the whole worksheet.
    async fn clear_values(&self) -> SyncResult<()>;

    /// Writes `message` to cell A1.
    async fn write_notice(&self, message: &str) -> SyncResult<()>;

    /// Resizes the worksheet to exactly the header plus the rows of `table` and writes
    /// them starting at A1.
    async fn write_table(&self, table: &RowSet) -> SyncResult<()>;

    /// Applies all `requests` in one batch.
    async fn apply_formats(&self, requests: &[FormatRequest]) -> SyncResult<()>;
}
