use std::sync::Arc;

use attic::access_log::AccessLog;
use attic::config::Config;
use attic::router::Router;
use attic::server::Listener;
use attic::static_files::FileIndex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let index = Arc::new(FileIndex::build(&cfg.static_files.root));
    tracing::info!(
        "Indexed {} files under {}",
        index.len(),
        cfg.static_files.root.display()
    );

    let router = Arc::new(Router::new(index));
    let access_log = Arc::new(AccessLog::new(cfg.access_log.path.clone()));

    let listener = Listener::bind(&cfg).await?;

    tokio::select! {
        res = listener.run(router, access_log) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
