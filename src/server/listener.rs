use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

use crate::access_log::AccessLog;
use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// A bounded TCP listener.
///
/// A semaphore permit is acquired before each accept, so at most
/// `max_connections` connection tasks run at once; further peers wait in
/// the OS accept backlog until a slot frees up.
pub struct Listener {
    inner: TcpListener,
    connection_limit: Arc<Semaphore>,
}

impl Listener {
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            inner: listener,
            connection_limit: Arc::new(Semaphore::new(cfg.server.max_connections)),
        })
    }

    /// The bound address; useful when the configured port is 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    pub async fn run(
        self,
        router: Arc<Router>,
        access_log: Arc<AccessLog>,
    ) -> anyhow::Result<()> {
        loop {
            // Acquire a slot first; the semaphore is never closed, so this
            // only waits, it does not fail.
            let permit = self
                .connection_limit
                .clone()
                .acquire_owned()
                .await
                .expect("connection semaphore closed");

            let (socket, peer) = match self.inner.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    // A failed accept must not take the server down
                    error!("Accept error: {}", e);
                    continue;
                }
            };
            debug!("Accepted connection from {}", peer);

            let router = router.clone();
            let access_log = access_log.clone();
            tokio::spawn(async move {
                // Held until the connection task finishes, releasing the slot
                let _permit = permit;
                let mut conn = Connection::new(socket, peer, router, access_log);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
