use error_stack::{report, ResultExt};
use google_sheets4::{
    api::{BatchUpdateSpreadsheetRequest, ClearValuesRequest, Request, Spreadsheet, ValueRange},
    Sheets,
};
use std::fmt::Debug;
use tracing::instrument;

use crate::{
    adapters::config::sheets_config::SpreadsheetConfig,
    domain::{
        sheets::{a1_notation::A1Notation, format::FormatRequest},
        table::RowSet,
    },
    ports::{
        sheet_sink::{SheetClient, SheetSink},
        sync_error::{SyncError, SyncResult},
    },
};

use super::{
    auth,
    format_request::{clear_formatting_request, repeat_cell_request, resize_request},
    http_client::{self, HttpsConnector},
    remote_error::remote_error,
    value_range_factory::ValueRangeFactory,
};

/// Connects to Google Sheets on demand. Holds nothing but configuration until
/// `open_worksheet` is called.
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    config: SpreadsheetConfig,
}

impl GoogleSheetsClient {
    pub fn new(config: SpreadsheetConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl SheetClient for GoogleSheetsClient {
    type Sink = SpreadsheetManager;

    async fn open_worksheet(&self) -> SyncResult<SpreadsheetManager> {
        SpreadsheetManager::open(self.config.clone()).await
    }
}

/// One authenticated worksheet of the configured spreadsheet.
pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
    sheet_id: i32,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpreadsheetManager {{ config: {:?}, sheet_id: {} }}",
            self.config, self.sheet_id
        )
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::open")]
    pub async fn open(config: SpreadsheetConfig) -> SyncResult<Self> {
        let client = http_client::http_client()?;
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        let sheet_id = Self::find_sheet_id(&hub, &config).await?;
        tracing::info!(
            "✅ เปิด worksheet '{}' สำเร็จ (sheet id {sheet_id})",
            config.worksheet_name
        );

        Ok(Self {
            config,
            hub,
            sheet_id,
        })
    }

    async fn find_sheet_id(
        hub: &Sheets<HttpsConnector>,
        config: &SpreadsheetConfig,
    ) -> SyncResult<i32> {
        let (_, spreadsheet) = hub
            .spreadsheets()
            .get(&config.spreadsheet_id)
            .doit()
            .await
            .map_err(|error| remote_error(error, SyncError::NotFound))
            .attach_printable_lazy(|| {
                format!("could not open spreadsheet {}", config.spreadsheet_id)
            })?;

        sheet_id_by_title(&spreadsheet, &config.worksheet_name).attach_printable_lazy(|| {
            format!("in spreadsheet {}", config.spreadsheet_id)
        })
    }

    fn worksheet_name(&self) -> &str {
        &self.config.worksheet_name
    }

    #[instrument(skip(requests), fields(requests = requests.len()))]
    async fn batch_update(&self, requests: Vec<Request>) -> SyncResult<()> {
        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(requests),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(request, &self.config.spreadsheet_id)
            .doit()
            .await
            .map_err(|error| remote_error(error, SyncError::Write))
            .attach_printable("batch update failed")?;

        Ok(())
    }

    #[instrument(skip(value_range))]
    async fn write_range(&self, range: &A1Notation, value_range: ValueRange) -> SyncResult<()> {
        self.hub
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, range.as_ref())
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .map_err(|error| remote_error(error, SyncError::Write))
            .attach_printable_lazy(|| format!("failed to write range {range}"))?;

        Ok(())
    }
}

/// Id of the worksheet whose title equals `title` exactly.
fn sheet_id_by_title(spreadsheet: &Spreadsheet, title: &str) -> SyncResult<i32> {
    spreadsheet
        .sheets
        .iter()
        .flatten()
        .filter_map(|sheet| sheet.properties.as_ref())
        .find(|properties| properties.title.as_deref() == Some(title))
        .and_then(|properties| properties.sheet_id)
        .ok_or_else(|| {
            report!(SyncError::NotFound).attach_printable(format!("worksheet '{title}' not found"))
        })
}

#[async_trait::async_trait]
impl SheetSink for SpreadsheetManager {
    #[instrument(skip(self))]
    async fn clear_formatting(&self) -> SyncResult<()> {
        self.batch_update(vec![clear_formatting_request(self.sheet_id)])
            .await
    }

    #[instrument(skip(self))]
    async fn clear_values(&self) -> SyncResult<()> {
        let range = A1Notation::whole_sheet(self.worksheet_name());

        self.hub
            .spreadsheets()
            .values_clear(
                ClearValuesRequest::default(),
                &self.config.spreadsheet_id,
                range.as_ref(),
            )
            .doit()
            .await
            .map_err(|error| remote_error(error, SyncError::Write))
            .attach_printable_lazy(|| format!("failed to clear range {range}"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn write_notice(&self, message: &str) -> SyncResult<()> {
        let range = A1Notation::first_cell(self.worksheet_name());
        self.write_range(&range, ValueRange::from_single_cell(message))
            .await
    }

    #[instrument(skip_all, fields(rows = table.len(), columns = table.columns().len()))]
    async fn write_table(&self, table: &RowSet) -> SyncResult<()> {
        let row_count = u32::try_from(table.len() + 1).unwrap_or(u32::MAX);
        let column_count = u32::try_from(table.columns().len()).unwrap_or(u32::MAX);

        self.batch_update(vec![resize_request(self.sheet_id, row_count, column_count)])
            .await
            .attach_printable("failed to resize the worksheet")?;

        let range = A1Notation::block_from_origin(self.worksheet_name(), row_count, column_count);
        self.write_range(&range, ValueRange::from_table(table)).await
    }

    #[instrument(skip_all, fields(requests = requests.len()))]
    async fn apply_formats(&self, requests: &[FormatRequest]) -> SyncResult<()> {
        if requests.is_empty() {
            return Ok(());
        }

        let requests = requests
            .iter()
            .map(|request| repeat_cell_request(self.sheet_id, request))
            .collect();
        self.batch_update(requests).await
    }
}
