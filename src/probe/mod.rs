//! The timed connect/close probe primitive
//!
//! One probe opens a TCP connection to the target, shuts it down in an
//! orderly fashion, and reports the elapsed wall-clock time. No
//! application bytes are ever sent or received; only the transport
//! handshake and teardown are measured.

use crate::models::Sample;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::{timeout, Instant};

/// Time one connect/close cycle against `addr`, bounded by `limit`.
///
/// A timeout, refusal, or unreachable destination degrades to
/// [`Sample::Unavailable`]; probe failures never propagate as errors so
/// the surrounding cycle can continue.
pub async fn probe_once(addr: SocketAddr, limit: Duration) -> Sample {
    let start = Instant::now();

    match timeout(limit, TcpStream::connect(addr)).await {
        Ok(Ok(mut stream)) => {
            // Orderly shutdown; a failure here still means the connect
            // itself succeeded, so the timing stands.
            let _ = stream.shutdown().await;
            Sample::Observed(start.elapsed().as_secs_f64() * 1000.0)
        }
        Ok(Err(_)) | Err(_) => Sample::Unavailable,
    }
}
