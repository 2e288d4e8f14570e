//! Demonstration

use clap::{Error, Parser};
use colored::Colorize as _;

use rshamir::api::demonstrate;

use crate::utilities::{clap_err_result, print_title};

#[derive(Parser)]
#[command(version, about("Shamir secret sharing -- 3-of-5 walkthrough"), long_about = None)]
pub struct Demo {}

impl Demo {
    pub fn run(&self) -> Result<(), Error> {
        let demo = clap_err_result!(demonstrate())?;

        print_title(&demo.message);
        println!();
        println!("{}\t{}", "Secret:".blue().bold(), demo.secret);
        println!(
            "{}\t{} of {}",
            "Threshold:".blue().bold(),
            demo.threshold,
            demo.total_shares
        );

        println!("{}", "\nShares:".blue().bold());
        for share in &demo.shares {
            println!("{}", share);
        }

        println!("{}", "\nReconstructions:".blue().bold());
        for reconstruction in &demo.reconstructions {
            let used = reconstruction
                .shares_used
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            let status = match reconstruction.success {
                true => "ok".green(),
                false => "failed".red(),
            };
            println!("[{}]\t{}\t{}", used, reconstruction.recovered, status);
        }

        println!();
        println!("{}", demo.key_point.bold());

        Ok(())
    }
}
