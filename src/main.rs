use clap::Parser;

use common::logging::{init_logger, LogLevel};
use tracing::{error, info};

mod aggregations;
mod api;
mod common;
mod data;
mod model;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long = "db", default_value = "enviro-watch.db3")]
    db_file: std::path::PathBuf,
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    #[arg(long = "log-file", default_value = "")]
    log_file: String,
    #[arg(long = "api-port", default_value = "8000")]
    api_port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    //The file appender only flushes while its guard is alive
    let _worker_guard = init_logger(args.log_level, args.log_file);

    let db = data::DbManager::new(args.db_file).unwrap_or_else(|e| {
        error!("Couldn't init db: {}", e);
        std::process::exit(1);
    });

    api::serve_api(db.get_db(), args.api_port).await;

    info!("Measurement api listening on port {}", args.api_port);

    tokio::signal::ctrl_c().await.unwrap();

    info!("Service interrupted by user, stopping process");

    std::process::exit(0);
}
