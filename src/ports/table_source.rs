use crate::domain::table::RowSet;

use super::sync_error::SyncResult;

pub trait TableSource: Send + Sync {
    /// Reads the whole source table. Fails with `SyncError::Connection`.
    fn fetch(&self) -> SyncResult<RowSet>;
}
