use std::{fs::File, process::ExitCode, sync::Mutex};

use pr_plan_sync::{
    adapters::{
        config::app_config::AppConfig, sheets::spreadsheet_manager::GoogleSheetsClient,
        sqlite::table_source::SqliteTableSource,
    },
    application::pr_plan_sync::PrPlanSyncRoutine,
    ports::routine::{Routine, SyncOutcome},
    prettyprint::PrettyFormatter,
};
use tracing::{error, info, warn, Subscriber};
use tracing_indicatif::{
    writer::{IndicatifWriter, Stdout},
    IndicatifLayer,
};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, Registry,
};

const LOG_FILE: &str = "pr_plan_sync.log";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = setup_tracing() {
        eprintln!("failed to set up logging: {e}");
    }
    setup_panic_hook();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(report) => {
            error!("❌ เกิดข้อผิดพลาดที่ไม่คาดคิด: {report:?}");
            return ExitCode::FAILURE;
        }
    };

    let routine = PrPlanSyncRoutine::new(
        SqliteTableSource::new(config.database),
        GoogleSheetsClient::new(config.sheets),
    );

    match routine.run().await {
        Ok(SyncOutcome::NoMatchingRows { notice }) => {
            warn!("{}: {notice}", routine.name());
            ExitCode::SUCCESS
        }
        Ok(SyncOutcome::Written { rows, columns, .. }) => {
            info!("✅ {}: OK ({rows} แถว, {columns} คอลัมน์)", routine.name());
            ExitCode::SUCCESS
        }
        Err(report) => {
            error!("❌ เกิดข้อผิดพลาดที่ไม่คาดคิด: {report:?}");
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let indicatif_layer = IndicatifLayer::new();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(console_writer(&indicatif_layer));

    let log_file_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(false))
        .with_writer(Mutex::new(File::create(LOG_FILE)?))
        .with_ansi(false);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("pr_plan_sync", tracing::Level::INFO),
        )
        .with(indicatif_layer)
        .with(log_file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(())
}

/// Console output goes to stdout, suspended while progress bars redraw.
fn console_writer<S>(indicatif_layer: &IndicatifLayer<S>) -> IndicatifWriter<Stdout>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    indicatif_layer.get_stdout_writer()
}

fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
