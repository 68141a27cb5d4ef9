use tracing::instrument;

use crate::{
    application::{formatting::plan_formats, status_filter::filter_active_rows},
    domain::{table::CellValue, timestamp::RunTimestamp},
    ports::{
        routine::{Routine, SyncOutcome},
        sheet_sink::{SheetClient, SheetSink},
        sync_error::SyncResult,
        table_source::TableSource,
    },
};

pub const UPDATE_COLUMN: &str = "Update";
pub const NO_MATCHING_ROWS_NOTICE: &str = "ไม่พบข้อมูลที่มี Status = TRUE ณ วันที่ ";

/// Mirrors the active PR plan rows into the worksheet: read, filter, reset the sheet,
/// write with an Update stamp, then restyle.
pub struct PrPlanSyncRoutine<S, C> {
    source: S,
    client: C,
}

impl<S, C> std::fmt::Debug for PrPlanSyncRoutine<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrPlanSyncRoutine")
    }
}

impl<S: TableSource, C: SheetClient> PrPlanSyncRoutine<S, C> {
    pub fn new(source: S, client: C) -> Self {
        Self { source, client }
    }

    #[instrument(skip(self))]
    pub async fn run_at(&self, timestamp: RunTimestamp) -> SyncResult<SyncOutcome> {
        tracing::info!("🚀 เริ่มกระบวนการอัปเดตข้อมูล...");

        let table = self.source.fetch()?;
        tracing::info!("ดึงข้อมูลสำเร็จ จำนวน {} แถว", table.len());

        let table = filter_active_rows(table);

        let sheet = self.client.open_worksheet().await?;
        reset_worksheet(&sheet).await?;

        if table.is_empty() {
            tracing::warn!("⚠️ ไม่พบข้อมูลที่มี Status = TRUE, หยุดการทำงาน");
            let notice = format!("{NO_MATCHING_ROWS_NOTICE}{timestamp}");
            sheet.write_notice(&notice).await?;
            tracing::info!("✅ แจ้งสถานะในชีตเรียบร้อย");
            return Ok(SyncOutcome::NoMatchingRows { notice });
        }

        let table =
            table.with_constant_column(UPDATE_COLUMN, CellValue::Text(timestamp.to_string()));

        tracing::info!("กำลังเขียนข้อมูลใหม่ลงในชีต...");
        sheet.write_table(&table).await?;
        tracing::info!("✅ เขียนข้อมูลลง Google Sheets สำเร็จ!");

        tracing::info!("กำลังจัดรูปแบบชีต...");
        let plan = plan_formats(table.columns());
        if plan.highlighted.is_empty() {
            tracing::warn!("⚠️ ไม่พบคอลัมน์สำหรับจัดรูปแบบพิเศษ, ตั้งค่าเฉพาะสีตัวอักษรพื้นฐาน");
        }
        sheet.apply_formats(&plan.requests).await?;
        tracing::info!("✅ จัดรูปแบบชีตสำเร็จ!");

        Ok(SyncOutcome::Written {
            rows: table.len(),
            columns: table.columns().len(),
            highlighted: plan.highlighted,
        })
    }
}

/// Drops every value and every format from the worksheet.
#[instrument(skip_all)]
pub async fn reset_worksheet<K: SheetSink>(sheet: &K) -> SyncResult<()> {
    tracing::info!("กำลังล้างข้อมูลและรูปแบบเก่าทั้งหมดในชีต...");
    sheet.clear_formatting().await?;
    sheet.clear_values().await?;
    tracing::info!("✅ ล้างชีตเรียบร้อย");
    Ok(())
}

#[async_trait::async_trait]
impl<S: TableSource, C: SheetClient> Routine for PrPlanSyncRoutine<S, C> {
    fn name(&self) -> &str {
        "PrPlanSyncRoutine"
    }

    #[instrument(skip(self), name = "PrPlanSyncRoutine::run")]
    async fn run(&self) -> SyncResult<SyncOutcome> {
        self.run_at(RunTimestamp::now()).await
    }
}
