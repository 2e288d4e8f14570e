//! # Shamir Secret Sharing Command Line Interface
//!
//! ```
//! Usage: shamir [OPTIONS] [COMMAND]
//!
//! Commands:
//!   split       Shamir secret sharing -- split a secret into shares
//!   combine     Shamir secret sharing -- combine shares into the secret
//!   demo        Shamir secret sharing -- 3-of-5 walkthrough
//!   parameters  Shamir secret sharing -- print parameters
//!   help        Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -v, --verbose  Debug logging on stderr
//!   -h, --help     Print help
//!   -V, --version  Print version
//! ```
//!
//! ## Split
//!
//! ```
//! $ shamir split "hello" -n 5 -t 3
//! Splitting secret.
//! Threshold: 3 of 5
//! 1-0a9bbb6526
//! 2-f3a33a2f67
//! ...
//! ```
//!
//! Shares can be written to files instead, `-o share` gives `share.1` to `share.5` and `-o keys.a` gives
//! `keys.a.1` to `keys.a.5`. Existing share files are never overwritten.
//! `SHAMIR_TOTAL_SHARES` and `SHAMIR_THRESHOLD` set the defaults for `-n` and `-t`.
//!
//! ## Combine
//!
//! ```
//! $ shamir combine 1-0a9bbb6526 share.3 5-4088b6bc68
//! Combining 3 shares.
//! Reading Share from file: share.3
//! Secret: hello
//! ```
//!
//! Progress lines and the `Secret: ` label go to stderr, only the secret itself is printed to stdout.
//! `--hex` prints it hex encoded.

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize as _;
use combine::Combining;
use demo::Demo;
use parameters::Parameters;
use split::Splitting;
use tracing_subscriber::EnvFilter;

mod combine;
mod demo;
mod parameters;
mod split;
mod utilities;

#[derive(Parser)]
#[command(version, about("Shamir secret sharing over GF(2^8)"))]
pub struct Cli {
    /// Debug logging on stderr. Otherwise `RUST_LOG` applies.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Split(Splitting),
    Combine(Combining),
    Demo(Demo),
    Parameters(Parameters),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rshamir=debug,shamir=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = match &cli.command {
        Some(Commands::Split(splitting)) => splitting.split_secret(),
        Some(Commands::Combine(combining)) => combining.combine_shares(),
        Some(Commands::Demo(demo)) => demo.run(),
        Some(Commands::Parameters(parameters)) => parameters.print_info(),
        // Print help
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(e) = res {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }

    std::process::exit(0);
}
