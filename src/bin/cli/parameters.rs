use clap::{Error, Parser};
use colored::Colorize as _;

use rshamir::constants::params;

#[derive(Parser)]
#[command(version, about("Shamir secret sharing -- print parameters"), long_about = None)]
pub struct Parameters {}

impl Parameters {
    pub fn print_info(&self) -> Result<(), Error> {
        println!("Shamir secret sharing parameters");
        if cfg!(feature = "parallel") {
            println!("Parallel share evaluation");
        }

        println!();

        println!("{}", "Field Parameters:".blue().bold());
        println!(
            "{}\t(q) The Galois field size GF(q) = GF(2^8) = GF(256)",
            params::PARAM_FIELD_SIZE.to_string().bold()
        );
        println!(
            "{}\tReduction polynomial x^8 + x^4 + x^3 + x + 1",
            format!("{:#x}", params::PARAM_MODULUS).bold()
        );
        println!(
            "{}\tGenerator of the multiplicative group",
            format!("{:#04x}", params::PARAM_GENERATOR).bold()
        );

        println!("{}", "\nSharing Parameters:".blue().bold());
        println!(
            "{}\t(N) Maximum number of shares",
            params::PARAM_MAX_SHARES.to_string().bold()
        );
        println!(
            "{}\t(T) Minimum threshold",
            params::PARAM_MIN_THRESHOLD.to_string().bold()
        );
        println!(
            "{}\t(N) Default number of shares",
            params::PARAM_DEFAULT_TOTAL_SHARES.to_string().bold()
        );
        println!(
            "{}\t(T) Default threshold",
            params::PARAM_DEFAULT_THRESHOLD.to_string().bold()
        );
        println!(
            "{}\tSeed size in bytes for reproducible splits",
            params::PARAM_SEED_SIZE.to_string().bold()
        );

        Ok(())
    }
}
