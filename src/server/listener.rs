use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::server::Site;
use crate::server::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);
    info!(
        root = %cfg.files.root.display(),
        transfer = ?cfg.files.transfer,
        "Serving files"
    );

    let site = Arc::new(Site::from_config(cfg));

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        // The codec is blocking; each connection gets its own worker thread.
        let stream = match socket.into_std() {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!("Failed to detach connection from {}: {}", peer, e);
                continue;
            }
        };

        let site = Arc::clone(&site);
        tokio::task::spawn_blocking(move || {
            let prepared = stream
                .set_nonblocking(false)
                .and_then(|()| stream.set_read_timeout(Some(site.io_timeout)))
                .and_then(|()| stream.set_write_timeout(Some(site.io_timeout)));
            if let Err(e) = prepared {
                tracing::error!("Failed to configure connection from {}: {}", peer, e);
                return;
            }

            let mut conn = Connection::new(stream, site);
            if let Err(e) = conn.run() {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
