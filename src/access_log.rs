//! Append-only request log.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use tokio::io::AsyncWriteExt;

use crate::http::request::Request;

/// Writes one line per request to a log file.
///
/// Each line has the shape:
///
/// ```text
/// [2025-01-01 12:00:00] 127.0.0.1 /index.html GET
/// ```
///
/// The path is recorded exactly as it appeared on the wire, before any
/// routing rewrites. The file is opened in append mode for every entry and
/// created on first use, so log writes from concurrent connection tasks
/// interleave at line granularity.
#[derive(Debug, Clone)]
pub struct AccessLog {
    path: PathBuf,
}

impl AccessLog {
    pub fn new(path: PathBuf) -> Self {
        AccessLog { path }
    }

    /// Appends one entry for `request` received from `client_ip`.
    ///
    /// The write is flushed before returning, so a failed append surfaces
    /// here instead of vanishing with the file handle.
    pub async fn append(&self, client_ip: IpAddr, request: &Request) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!(
            "[{}] {} {} {}\n",
            timestamp, client_ip, request.path, request.method
        );

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
