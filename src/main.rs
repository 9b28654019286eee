use std::sync::Arc;

use statik::config::Config;
use statik::serve::files::StaticFiles;
use statik::serve::mime::MimeTable;
use statik::server;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from_args(std::env::args().skip(1))?;

    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    tracing::info!("listening on {}", cfg.listen_addr());

    let files = Arc::new(StaticFiles::new(
        cfg.document_root.clone(),
        MimeTable::default(),
    ));

    tokio::select! {
        res = server::listener::run(listener, files, cfg.limits) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
