use anyhow::Context;
use portfolio::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let mode = config.runtime_mode;
    let app = App::build(config).await?;

    tracing::info!(port = app.port(), mode = mode.as_str(), "starting server");
    app.serve().await.context("The server should be running")?;

    Ok(())
}
