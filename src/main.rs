use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vote_snapshot::adapters::config::app_config::AppConfig;

mod cli_adapter;

use cli_adapter::CliAdapter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let args: Vec<String> = env::args().collect();
    let command = CliAdapter::parse_args(&args)?;

    let config = AppConfig::load().map_err(|report| format!("{:?}", report))?;
    info!("Starting vote-snapshot");

    match CliAdapter::new(config).run(command).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            Ok(())
        }
        Err(report) => {
            error!("Command failed: {:?}", report);
            Err(format!("{}", report.current_context()).into())
        }
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
