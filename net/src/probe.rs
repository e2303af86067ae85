use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// How long a single connection attempt may take before it is abandoned.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Check whether `host` accepts TCP connections on `port`.
///
/// One attempt, bounded by [`CONNECT_TIMEOUT`]. The connection is shut down
/// as soon as it is established; the probe only answers "is anything
/// listening". Refused, timed out and unresolvable all come back `false`;
/// callers that need to know why must connect themselves.
pub async fn port_open(host: &str, port: u16) -> bool {
    match timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port))).await {
        Ok(Ok(mut stream)) => {
            // Close errors don't matter; the socket answered.
            let _ = stream.shutdown().await;
            true
        }
        Ok(Err(e)) => {
            log::debug!("probe of {host}:{port} failed: {e}");
            false
        }
        Err(_) => {
            log::debug!("probe of {host}:{port} timed out");
            false
        }
    }
}
