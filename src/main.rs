use iface_config_sheet::config::AppConfig;
use iface_config_sheet::output::{print_summary, CsvSink};
use iface_config_sheet::sheets::{access_token, SheetsClient};
use iface_config_sheet::{get_interfaces, publish_interfaces};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    // No log4rs.yml next to the binary: info to stderr
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing fallback logger: {e}");
            }
        }
        Err(e) => eprintln!("Error building fallback logger config: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let cfg = AppConfig::from_env(std::env::args().skip(1));
    log::debug!(
        "config_file={} worksheet={} dry_run={}",
        cfg.config_file.display(),
        cfg.worksheet_name,
        cfg.is_dry_run()
    );

    let records = get_interfaces(&cfg.config_file).map_err(|e| {
        log::error!("Stopping, config file not processed: {e}");
        e
    })?;

    match &cfg.spreadsheet_id {
        Some(spreadsheet_id) => {
            let token = access_token(cfg.access_token.as_deref())?;
            let client = SheetsClient::new(&cfg.sheets_api_url, spreadsheet_id, &token)?;
            publish_interfaces(&client, &cfg.worksheet_name, &records).await?;
            log::info!("Worksheet '{}' updated", cfg.worksheet_name);
            print_summary(&records);
        }
        None => publish_interfaces(&CsvSink, &cfg.worksheet_name, &records).await?,
    }

    Ok(())
}
