//! In-memory stand-ins for the database and the spreadsheet service.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use error_stack::report;

use crate::{
    domain::{
        sheets::format::{CellStyle, FormatRequest},
        table::{CellValue, RowSet},
    },
    ports::{
        sheet_sink::{SheetClient, SheetSink},
        sync_error::{SyncError, SyncResult},
        table_source::TableSource,
    },
};

pub struct MemoryTableSource {
    result: Result<RowSet, SyncError>,
}

impl MemoryTableSource {
    pub fn new(rows: RowSet) -> Self {
        Self { result: Ok(rows) }
    }

    pub fn failing(error: SyncError) -> Self {
        Self { result: Err(error) }
    }
}

impl TableSource for MemoryTableSource {
    fn fetch(&self) -> SyncResult<RowSet> {
        self.result
            .clone()
            .map_err(|error| report!(error).attach_printable("memory source failure"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetOperation {
    ClearFormatting,
    ClearValues,
    WriteNotice,
    WriteTable,
    ApplyFormats,
}

/// A worksheet grid with values and per-cell styles. Starts at the service's default
/// 1000 x 26 size.
#[derive(Debug)]
pub struct SheetState {
    pub row_count: u32,
    pub column_count: u32,
    pub values: HashMap<(u32, u32), CellValue>,
    pub styles: HashMap<(u32, u32), CellStyle>,
    pub operations: Vec<SheetOperation>,
    pub format_batches: Vec<Vec<FormatRequest>>,
    pub fail_on: Option<SheetOperation>,
}

impl Default for SheetState {
    fn default() -> Self {
        Self {
            row_count: 1000,
            column_count: 26,
            values: HashMap::new(),
            styles: HashMap::new(),
            operations: Vec::new(),
            format_batches: Vec::new(),
            fail_on: None,
        }
    }
}

impl SheetState {
    pub fn cell(&self, row: u32, column: u32) -> CellValue {
        self.values
            .get(&(row, column))
            .cloned()
            .unwrap_or(CellValue::Null)
    }

    pub fn style(&self, row: u32, column: u32) -> CellStyle {
        self.styles
            .get(&(row, column))
            .cloned()
            .unwrap_or_default()
    }

    /// Every cell holding something other than an empty value.
    pub fn non_empty_cells(&self) -> Vec<((u32, u32), CellValue)> {
        let mut cells: Vec<_> = self
            .values
            .iter()
            .filter(|(_, value)| !value.to_string().is_empty())
            .map(|(position, value)| (*position, value.clone()))
            .collect();
        cells.sort_by_key(|(position, _)| *position);
        cells
    }

    /// The grid read back as text, one vector per row.
    pub fn read_back(&self) -> Vec<Vec<String>> {
        (0..self.row_count)
            .map(|row| {
                (0..self.column_count)
                    .map(|column| self.cell(row, column).to_string())
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    state: Arc<Mutex<SheetState>>,
}

impl MemorySheet {
    pub fn state(&self) -> MutexGuard<'_, SheetState> {
        self.state.lock().unwrap()
    }

    fn record(&self, operation: SheetOperation) -> SyncResult<MutexGuard<'_, SheetState>> {
        let mut state = self.state();
        state.operations.push(operation);
        if state.fail_on == Some(operation) {
            return Err(report!(SyncError::Write)
                .attach_printable(format!("injected failure on {operation:?}")));
        }
        Ok(state)
    }
}

#[async_trait::async_trait]
impl SheetSink for MemorySheet {
    async fn clear_formatting(&self) -> SyncResult<()> {
        self.record(SheetOperation::ClearFormatting)?.styles.clear();
        Ok(())
    }

    async fn clear_values(&self) -> SyncResult<()> {
        self.record(SheetOperation::ClearValues)?.values.clear();
        Ok(())
    }

    async fn write_notice(&self, message: &str) -> SyncResult<()> {
        self.record(SheetOperation::WriteNotice)?
            .values
            .insert((0, 0), CellValue::from(message));
        Ok(())
    }

    async fn write_table(&self, table: &RowSet) -> SyncResult<()> {
        let mut state = self.record(SheetOperation::WriteTable)?;

        let row_count = table.len() as u32 + 1;
        let column_count = table.columns().len() as u32;
        state.row_count = row_count;
        state.column_count = column_count;
        state
            .values
            .retain(|(row, column), _| *row < row_count && *column < column_count);
        state
            .styles
            .retain(|(row, column), _| *row < row_count && *column < column_count);

        for (column, name) in table.columns().iter().enumerate() {
            state
                .values
                .insert((0, column as u32), CellValue::from(name.as_str()));
        }
        for (row, values) in table.rows().iter().enumerate() {
            for (column, value) in values.iter().enumerate() {
                state
                    .values
                    .insert((row as u32 + 1, column as u32), value.clone());
            }
        }
        Ok(())
    }

    async fn apply_formats(&self, requests: &[FormatRequest]) -> SyncResult<()> {
        let mut state = self.record(SheetOperation::ApplyFormats)?;

        for request in requests {
            for row in 0..state.row_count {
                for column in 0..state.column_count {
                    if request.span.contains(row, column) {
                        state
                            .styles
                            .entry((row, column))
                            .or_default()
                            .assign(&request.style);
                    }
                }
            }
        }
        state.format_batches.push(requests.to_vec());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySheetClient {
    pub sheet: MemorySheet,
    pub open_error: Option<SyncError>,
    pub opened: Arc<Mutex<u32>>,
}

impl MemorySheetClient {
    pub fn failing(error: SyncError) -> Self {
        Self {
            open_error: Some(error),
            ..Default::default()
        }
    }

    pub fn open_count(&self) -> u32 {
        *self.opened.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl SheetClient for MemorySheetClient {
    type Sink = MemorySheet;

    async fn open_worksheet(&self) -> SyncResult<Self::Sink> {
        *self.opened.lock().unwrap() += 1;
        match self.open_error {
            Some(error) => Err(report!(error)),
            None => Ok(self.sheet.clone()),
        }
    }
}
