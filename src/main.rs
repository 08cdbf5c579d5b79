use clap::Parser;
use holonet::StartTab;
use holonet::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "holonet", about = "Browse Star Wars characters and tally favorites by gender")]
struct Args {
    /// Base URL of the Star Wars API (the people endpoint is appended)
    #[arg(long)]
    base_url: Option<String>,

    /// Tab to open on
    #[arg(long, value_enum)]
    start_tab: Option<StartTab>,

    /// Log level written to holonet.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to holonet.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("holonet.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config error, using defaults: {}", e);
            config::HolonetConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.start_tab);

    log::info!(
        "Holonet starting up: base_url={}, timeout={:?}, start_tab={:?}",
        resolved.base_url,
        resolved.timeout,
        resolved.start_tab
    );

    holonet::tui::run(resolved)
}
