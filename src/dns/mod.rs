//! Host resolution, parameterized by address family
//!
//! Resolution happens exactly once per run; every probe reuses the
//! resolved address so DNS latency never pollutes the connect-timing
//! samples.

use crate::error::{AppError, Result};
use crate::models::AddressFamily;
use std::net::{IpAddr, SocketAddr};
use trust_dns_resolver::{config::LookupIpStrategy, system_conf, TokioAsyncResolver};

/// The single address a run probes, plus the name to display for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHost {
    pub address: IpAddr,
    pub display_name: String,
}

impl ResolvedHost {
    /// Socket address for probing one of the configured ports
    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::new(self.address, port)
    }
}

/// Resolver that yields exactly one usable address in the requested
/// address family.
pub struct HostResolver {
    family: AddressFamily,
}

impl HostResolver {
    pub fn new(family: AddressFamily) -> Self {
        Self { family }
    }

    /// Resolve a host name (or IP literal) to one address in the
    /// requested family. Failure is fatal for the run.
    pub async fn resolve(&self, host: &str) -> Result<ResolvedHost> {
        if host.is_empty() {
            return Err(AppError::resolution("Host name is empty"));
        }

        // An IP literal short-circuits DNS entirely
        if let Ok(address) = host.parse::<IpAddr>() {
            if !self.matches_family(address) {
                return Err(AppError::resolution(format!(
                    "Address '{}' is not an {} address",
                    host, self.family
                )));
            }
            return Ok(ResolvedHost {
                address,
                display_name: host.to_string(),
            });
        }

        let resolver = self.build_resolver()?;
        let lookup = resolver.lookup_ip(host).await.map_err(|e| {
            AppError::resolution(format!("Cannot resolve '{}': {}", host, e))
        })?;

        let address = lookup
            .iter()
            .find(|&addr| self.matches_family(addr))
            .ok_or_else(|| {
                AppError::resolution(format!(
                    "Host '{}' has no {} address",
                    host, self.family
                ))
            })?;

        Ok(ResolvedHost {
            address,
            display_name: host.to_string(),
        })
    }

    fn build_resolver(&self) -> Result<TokioAsyncResolver> {
        let (config, mut opts) = system_conf::read_system_conf().map_err(|e| {
            AppError::resolution(format!("Failed to read system DNS configuration: {}", e))
        })?;

        opts.ip_strategy = match self.family {
            AddressFamily::V4 => LookupIpStrategy::Ipv4Only,
            AddressFamily::V6 => LookupIpStrategy::Ipv6Only,
        };

        Ok(TokioAsyncResolver::tokio(config, opts))
    }

    fn matches_family(&self, address: IpAddr) -> bool {
        match self.family {
            AddressFamily::V4 => address.is_ipv4(),
            AddressFamily::V6 => address.is_ipv6(),
        }
    }
}
