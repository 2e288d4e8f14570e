//! Splitting

use std::{fs::OpenOptions, io::Write as _, path::PathBuf};

use clap::{error::ErrorKind, Error, Parser};
use colored::Colorize as _;

use rshamir::{
    api::{share_file_path, EncodedShare},
    constants::params::{PARAM_DEFAULT_THRESHOLD, PARAM_DEFAULT_TOTAL_SHARES},
    split, split_with, ShareConfig, SharedSecret,
};

use crate::utilities::{clap_err_result, get_bytes_from_file_or_string, get_prg, print_title};

#[derive(Parser)]
#[command(version, about("Shamir secret sharing -- split a secret into shares"), long_about = None)]
pub struct Splitting {
    /// Secret file or string
    pub secret: String,

    /// (N) Total number of shares, at most 255
    #[arg(short('n'), long("shares"), env = "SHAMIR_TOTAL_SHARES", default_value_t = PARAM_DEFAULT_TOTAL_SHARES)]
    pub total_shares: usize,

    /// (T) Number of shares needed to reconstruct, at least 2
    #[arg(short, long, env = "SHAMIR_THRESHOLD", default_value_t = PARAM_DEFAULT_THRESHOLD)]
    pub threshold: usize,

    /// Hex encoded 32 byte seed for a reproducible split
    #[arg(long)]
    pub seed: Option<String>,

    /// Output files, one per share: FILE.<index>
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Splitting {
    /// Output shares to files or stdout. Returns true if shares are saved to files. False if printed to stdout.
    fn output_shares(&self, shared: &SharedSecret) -> Result<bool, Error> {
        let Some(path_arg) = self.output.as_ref() else {
            for share in &shared.shares {
                println!("{}", EncodedShare::from(share));
            }
            return Ok(false);
        };

        let mut path_buf = path_arg.clone();
        if path_buf.is_dir() {
            path_buf.push("share");
        }

        let share_paths: Vec<PathBuf> = shared
            .shares
            .iter()
            .map(|share| share_file_path(&path_buf, share.index))
            .collect();

        // Never replace shares of an earlier split
        if let Some(existing) = share_paths.iter().find(|path| path.exists()) {
            return Err(Error::raw(
                ErrorKind::ValueValidation,
                format!("Share file {:?} already exists", existing.display()),
            ));
        }

        for (share, share_path) in shared.shares.iter().zip(&share_paths) {
            let mut file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(share_path)?;
            file.write_all(EncodedShare::from(share).to_string().as_bytes())?;
            eprintln!("{} {:?}", "Share saved to".blue(), share_path.display());
        }

        Ok(true)
    }

    pub fn split_secret(&self) -> Result<(), Error> {
        print_title("Splitting secret.");
        let secret = get_bytes_from_file_or_string(&self.secret, "Secret")?;
        let config = clap_err_result!(ShareConfig::new(self.total_shares, self.threshold))?;

        let shared = match get_prg(self.seed.as_ref())? {
            Some(mut prg) => clap_err_result!(split_with(&mut prg, &secret, config))?,
            None => clap_err_result!(split(&secret, config))?,
        };

        eprintln!(
            "{}: {} of {}",
            "Threshold".blue(),
            shared.threshold,
            shared.total_shares
        );
        self.output_shares(&shared)?;

        Ok(())
    }
}
