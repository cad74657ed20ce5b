use hwbot_poller::startup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot=debug,hwbot_poller=debug,hwbot_notifier=info".into()),
        )
        .json()
        .init();

    // Load configuration; credentials are checked before any network call
    dotenvy::dotenv().ok();
    let mut poller = startup(|key| std::env::var(key).ok())?;

    // Run until Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Homework status bot stopped.");
    Ok(())
}
