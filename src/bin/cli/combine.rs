//! Combining

use clap::{ArgAction, Error, Parser};
use colored::Colorize as _;

use rshamir::{api::EncodedShare, combine, Share};

use crate::utilities::{
    clap_err_result, clap_err_result_msg, get_string_from_file_or_string, print_title,
};

#[derive(Parser)]
#[command(version, about("Shamir secret sharing -- combine shares into the secret"), long_about = None)]
pub struct Combining {
    /// Shares, each a file or a string `<index>-<hex>`
    #[arg(required = true)]
    pub shares: Vec<String>,

    /// Print the secret hex encoded instead of as text
    #[arg(long, action=ArgAction::SetTrue)]
    pub hex: bool,
}

impl Combining {
    fn get_shares(&self) -> Result<Vec<Share>, Error> {
        let mut shares = Vec::with_capacity(self.shares.len());
        for input in &self.shares {
            let text = get_string_from_file_or_string(input, "Share")?;
            let encoded = clap_err_result_msg!(
                text.parse::<EncodedShare>(),
                format!("Could not parse share {:?}", input)
            )?;
            shares.push(clap_err_result!(Share::try_from(&encoded))?);
        }
        Ok(shares)
    }

    pub fn combine_shares(&self) -> Result<(), Error> {
        print_title(&format!("Combining {} shares.", self.shares.len()));
        let shares = self.get_shares()?;
        let secret = clap_err_result!(combine(&shares))?;

        eprint!("{}", "Secret: ".blue());
        if self.hex {
            println!("{}", hex::encode(&secret));
        } else {
            println!("{}", String::from_utf8_lossy(&secret));
        }

        Ok(())
    }
}
