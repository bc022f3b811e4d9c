mod charts;
mod config;
mod dataset;
mod report;
mod routines;
mod sheets;

use std::process::ExitCode;

use error_stack::ResultExt;

use crate::config::app_config::AppConfig;
use crate::routines::{
    load,
    routine::{Routine, RoutineError},
    sheet_report_routine::SheetReportRoutine,
};
use crate::sheets::spreadsheet_manager::SpreadsheetManager;

async fn run_routine(routine: &dyn Routine) -> ExitCode {
    match routine.run().await {
        Ok(()) => {
            log::info!("✅ {}: OK", routine.name());
            ExitCode::SUCCESS
        }
        Err(report) => {
            log::error!("❌ {}: {:?}", report.current_context(), report);
            ExitCode::FAILURE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(report) => {
            log::error!("❌ Failed to load configuration: {:?}", report);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Loaded configuration: {:?}", config);

    // Reading the key file is part of loading the data: same report, same exit
    let spreadsheet_manager = match SpreadsheetManager::new(config.sheets.clone())
        .await
        .map_err(load::classify)
        .change_context(RoutineError::LoadFailed)
    {
        Ok(spreadsheet_manager) => spreadsheet_manager,
        Err(report) => {
            log::error!("❌ {}: {:?}", report.current_context(), report);
            return ExitCode::FAILURE;
        }
    };

    let routine = SheetReportRoutine::new(
        spreadsheet_manager,
        config.sheets.range.clone(),
        config.report.clone(),
    );

    run_routine(&routine).await
}
