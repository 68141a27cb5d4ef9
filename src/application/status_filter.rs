use tracing::instrument;

use crate::domain::table::{CellValue, RowSet};

pub const STATUS_COLUMN: &str = "Status";

/// A status counts as active when its text form, uppercased, is exactly `TRUE`.
pub fn is_active_status(value: &CellValue) -> bool {
    value.to_string().to_uppercase() == "TRUE"
}

/// Keeps the rows whose `Status` is active. Without a `Status` column the table is
/// returned unchanged.
#[instrument(skip_all, fields(rows = row_set.len()))]
pub fn filter_active_rows(mut row_set: RowSet) -> RowSet {
    let Some(status_index) = row_set.column_index(STATUS_COLUMN) else {
        tracing::warn!(
            "⚠️ ไม่พบคอลัมน์ '{}' ในข้อมูล, ข้ามขั้นตอนการกรอง",
            STATUS_COLUMN
        );
        return row_set;
    };

    tracing::info!("ข้อมูลก่อนกรอง: {} แถว", row_set.len());
    row_set.retain_rows(|row| is_active_status(&row[status_index]));
    tracing::info!("ข้อมูลหลังกรอง (Status=TRUE): {} แถว", row_set.len());

    row_set
}
