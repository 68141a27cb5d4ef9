use error_stack::ResultExt;
use rusqlite::{types::ValueRef, Connection, OpenFlags};
use tracing::instrument;

use crate::{
    adapters::config::database_config::DatabaseConfig,
    domain::table::{CellValue, RowSet},
    ports::{
        sync_error::{SyncError, SyncResult},
        table_source::TableSource,
    },
};

/// Reads the source table from a SQLite file. The connection lives only for the
/// duration of one `fetch`.
#[derive(Debug, Clone)]
pub struct SqliteTableSource {
    config: DatabaseConfig,
}

impl SqliteTableSource {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

impl TableSource for SqliteTableSource {
    #[instrument(name = "SqliteTableSource::fetch", skip(self), fields(path = %self.config.path.display()))]
    fn fetch(&self) -> SyncResult<RowSet> {
        tracing::info!("กำลังเชื่อมต่อฐานข้อมูล: {}", self.config.path.display());

        // Read-only so that a wrong path fails instead of creating an empty database.
        let connection = Connection::open_with_flags(
            &self.config.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .change_context(SyncError::Connection)
        .attach_printable_lazy(|| {
            format!("could not open database {}", self.config.path.display())
        })?;

        let (columns, rows) = read_rows(&connection, &self.config.query)
            .change_context(SyncError::Connection)
            .attach_printable_lazy(|| format!("query failed: {}", self.config.query))?;

        RowSet::new(columns, rows).change_context(SyncError::Connection)
    }
}

fn read_rows(
    connection: &Connection,
    query: &str,
) -> rusqlite::Result<(Vec<String>, Vec<Vec<CellValue>>)> {
    let mut statement = connection.prepare(query)?;
    let columns: Vec<String> = statement
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();
    let column_count = columns.len();

    let rows = statement
        .query_map([], |row| {
            (0..column_count)
                .map(|index| row.get_ref(index).map(cell_value))
                .collect::<rusqlite::Result<Vec<_>>>()
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok((columns, rows))
}

fn cell_value(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(value) => CellValue::Integer(value),
        ValueRef::Real(value) => CellValue::Real(value),
        ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => {
            CellValue::Text(bytes.iter().map(|byte| format!("{byte:02x}")).collect())
        }
    }
}
