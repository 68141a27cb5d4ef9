use super::sync_error::SyncResult;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing passed the filter; the worksheet holds only `notice` in A1.
    NoMatchingRows { notice: String },
    /// The table was written. `columns` includes the appended Update column.
    Written {
        rows: usize,
        columns: usize,
        highlighted: Vec<String>,
    },
}

#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> SyncResult<SyncOutcome>;
}
