use anyhow::Result;
use clap::Parser;
use tracing::error;

use slack_history::cli::Cli;
use slack_history::core::config::ExportConfig;
use slack_history::features::export_channel;
use slack_history::slack::SlackClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    slack_history::setup_logging(cli.log_json);

    // A missing .env is fine; the token may come from the real environment.
    let _ = dotenvy::dotenv();

    let config = ExportConfig::from_env(&cli).map_err(|e| {
        error!("{}", e);
        e
    })?;

    let client = SlackClient::new(config.token.clone()).with_archived(config.include_archived);

    export_channel(&client, &config).await.map_err(|e| {
        error!("{}", e);
        e
    })?;

    println!("Wrote {}", config.output.display());
    Ok(())
}
