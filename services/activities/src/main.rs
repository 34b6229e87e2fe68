use anyhow::Result;
use clap::Parser;
use tracing::info;

use activities::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    activities::init_tracing(config.json_logs);

    info!("Starting Mergington Activities");
    activities::start_server(config).await
}
