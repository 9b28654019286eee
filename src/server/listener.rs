use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Limits;
use crate::http::connection::Connection;
use crate::serve::files::StaticFiles;

/// Accepts connections forever, one task per accepted socket.
///
/// A failed accept or a per-connection error is logged and the loop keeps
/// serving: one misbehaving client must never affect the next.
pub async fn run(
    listener: TcpListener,
    files: Arc<StaticFiles>,
    limits: Limits,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("accept failed: {e}");
                continue;
            }
        };
        info!("accepted connection from {peer}");

        let files = Arc::clone(&files);
        tokio::spawn(async move {
            let conn = Connection::new(socket, files, limits);
            if let Err(e) = conn.run().await {
                error!("connection error from {peer}: {e}");
            }
        });
    }
}
