//! Zing - Zero-packet InterNet Groper
//!
//! A reachability and latency probe that measures the wall-clock cost of
//! opening and immediately closing a TCP connection to one or more ports
//! on a host, without transferring any payload bytes, and reports
//! per-cycle times plus min/avg/max/stddev summary statistics.

pub mod app;
pub mod cli;
pub mod dns;
pub mod error;
pub mod models;
pub mod output;
pub mod probe;
pub mod stats;

// Re-export commonly used types
pub use app::{ProbeRun, RunReport};
pub use error::{AppError, Result};
pub use models::{AddressFamily, Config, Sample};
pub use stats::SummaryStatistics;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_HOST: &str = "localhost";
    pub const DEFAULT_PORTS: &[u16] = &[80, 443];
    pub const DEFAULT_COUNT: u32 = 4;
    pub const DEFAULT_LIMIT: u32 = 4;
    pub const DEFAULT_TIMEOUT_MS: u64 = 4000;
}
