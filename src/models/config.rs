//! Configuration data model and validation

use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Address family requested for host resolution and probing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressFamily {
    /// IPv4 (`-4`, the default)
    V4,
    /// IPv6 (`-6`)
    V6,
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Immutable run parameters, built once by the CLI layer and passed
/// explicitly into the resolver and the probe orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Target host name or IP literal
    pub host: String,

    /// Address family used for resolution and probing
    pub family: AddressFamily,

    /// Ports probed in order within each operation
    pub ports: Vec<u16>,

    /// Per-probe connect timeout in milliseconds
    pub timeout_ms: u64,

    /// Number of reporting cycles (the warm-up cycle is extra)
    pub count: u32,

    /// Operations per cycle
    pub limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            family: AddressFamily::V4,
            ports: defaults::DEFAULT_PORTS.to_vec(),
            timeout_ms: defaults::DEFAULT_TIMEOUT_MS,
            count: defaults::DEFAULT_COUNT,
            limit: defaults::DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Get the probe timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Number of probes issued per cycle (ports x operations)
    pub fn ops_per_cycle(&self) -> usize {
        self.ports.len() * self.limit as usize
    }

    /// Total number of samples a complete run records, including the
    /// warm-up cycle: `(count + 1) * limit * ports`.
    pub fn expected_samples(&self) -> usize {
        (self.count as usize + 1) * self.limit as usize * self.ports.len()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(AppError::config("Host cannot be empty"));
        }

        if self.ports.is_empty() {
            return Err(AppError::config("Port list cannot be empty"));
        }

        // u16 already bounds the upper end at 65535
        if self.ports.contains(&0) {
            return Err(AppError::config("Port 0 is not a valid target port"));
        }

        if self.timeout_ms == 0 {
            return Err(AppError::config("Timeout must be greater than 0 ms"));
        }

        if self.limit == 0 {
            return Err(AppError::config(
                "Operations per cycle must be greater than 0",
            ));
        }

        Ok(())
    }
}
