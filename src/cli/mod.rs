//! Command-line interface: argv scanning and usage text
//!
//! The flag surface is contractual and single-dash (`-4`, `-6`, `-op`),
//! so arguments are scanned left to right by hand instead of going
//! through a derive-style parser.

use crate::error::{AppError, Result};
use crate::models::{AddressFamily, Config};
use crate::{PKG_NAME, VERSION};

pub const ZING_USAGE: &str =
    "Usage: zing [ -h | [-4|-6] [-c count] [-op ops] [-p ports] [-t timeout] ] host";
pub const ZING_EXAMPLE: &str = "zing -4 -c 4 -op 4 -p 80,443 -t 4000 google.com";

/// What the parsed command line asks the program to do
#[derive(Debug, Clone, PartialEq)]
pub enum CliOutcome {
    /// Probe with the fully populated configuration
    Run(Config),
    /// `-h`: print usage and exit 0
    Help,
}

/// Usage/help text printed for `-h`
pub fn usage_text() -> String {
    format!("{} {}\n{}\n{}", PKG_NAME, VERSION, ZING_USAGE, ZING_EXAMPLE)
}

/// Parse command-line arguments (without the program name) into a
/// validated configuration.
///
/// Unknown tokens starting with `-` are fatal; a bare token names the
/// host. With no arguments the defaults apply (localhost, ports
/// 80,443).
pub fn parse_args<I>(args: I) -> Result<CliOutcome>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" => return Ok(CliOutcome::Help),
            "-4" => config.family = AddressFamily::V4,
            "-6" => config.family = AddressFamily::V6,
            "-c" => config.count = parse_number(&mut iter, "-c")?,
            "-op" => config.limit = parse_number(&mut iter, "-op")?,
            "-t" => config.timeout_ms = parse_number(&mut iter, "-t")?,
            "-p" => {
                let value = flag_value(&mut iter, "-p")?;
                config.ports = parse_ports(&value)?;
            }
            other => {
                if other.starts_with('-') {
                    return Err(AppError::config(format!(
                        "'{}' is not a recognized command-line parameter",
                        other
                    )));
                }
                config.host = other.to_string();
            }
        }
    }

    config.validate()?;
    Ok(CliOutcome::Run(config))
}

fn flag_value<I>(iter: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    iter.next()
        .ok_or_else(|| AppError::config(format!("Missing value after '{}'", flag)))
}

fn parse_number<I, T>(iter: &mut I, flag: &str) -> Result<T>
where
    I: Iterator<Item = String>,
    T: std::str::FromStr,
{
    let value = flag_value(iter, flag)?;
    value.trim().parse::<T>().map_err(|_| {
        AppError::config(format!("Invalid numeric value '{}' for '{}'", value, flag))
    })
}

/// Parse a comma-separated port list; every entry must be 1-65535.
fn parse_ports(value: &str) -> Result<Vec<u16>> {
    let mut ports = Vec::new();
    for part in value.split(',') {
        let port: u16 = part
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid port '{}'", part.trim())))?;
        if port == 0 {
            return Err(AppError::config("Port 0 is not a valid target port"));
        }
        ports.push(port);
    }
    Ok(ports)
}
