//! Zing - zero-packet internet groper CLI

use std::process;
use zing::app::run_application;
use zing::cli::{parse_args, usage_text, CliOutcome};

#[tokio::main]
async fn main() {
    let args = std::env::args().skip(1);

    let config = match parse_args(args) {
        Ok(CliOutcome::Help) => {
            println!("{}", usage_text());
            process::exit(0);
        }
        Ok(CliOutcome::Run(config)) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage_text());
            process::exit(e.exit_code());
        }
    };

    match run_application(config).await {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
