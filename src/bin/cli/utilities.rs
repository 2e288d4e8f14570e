//! Utility functions

use std::path::Path;

use clap::Error;
use colored::Colorize as _;

use rshamir::subroutines::prg::PRG;

macro_rules! clap_err_result {
    ($e:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, e)),
        }
    };

    ($e:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw(clap::error::ErrorKind::InvalidValue, e)),
        }
    };
}
pub(super) use clap_err_result;

macro_rules! clap_err_result_msg {
    ($e:expr, $m:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, format!("{}: {}", $m, e))),
        }
    };

    ($e:expr,  $m:expr) => {
        clap_err_result_msg!($e, $m, clap::error::ErrorKind::InvalidValue)
    };
}
pub(super) use clap_err_result_msg;

pub(super) fn print_title(title: &str) {
    eprintln!("{}", title.green().bold());
}

/// Returns a seeded [`PRG`] if a hex seed is given. `None` means the operating system CSPRNG is used.
pub(super) fn get_prg(seed: Option<&String>) -> Result<Option<PRG>, Error> {
    let Some(seed) = seed else {
        return Ok(None);
    };

    eprintln!(
        "{}",
        "Seeded split: the shares are reproducible. Do not use for real secrets.".yellow()
    );
    let prg = clap_err_result_msg!(PRG::init_hex(seed), "Could not use seed")?;
    Ok(Some(prg))
}

/// Checks if the input is a file or a string. Returns the raw bytes of the file or of the input string.
pub(super) fn get_bytes_from_file_or_string(
    file_or_string: &str,
    title: &str,
) -> Result<Vec<u8>, Error> {
    let path = Path::new(file_or_string);
    if path.is_file() {
        eprintln!(
            "{}: {}",
            format!("Reading {} from file", title).blue(),
            path.display()
        );
        Ok(std::fs::read(path)?)
    } else {
        Ok(file_or_string.as_bytes().to_vec())
    }
}

/// Like [`get_bytes_from_file_or_string`], for text inputs. Surrounding whitespace is trimmed.
pub(super) fn get_string_from_file_or_string(
    file_or_string: &str,
    title: &str,
) -> Result<String, Error> {
    let path = Path::new(file_or_string);
    if path.is_file() {
        eprintln!(
            "{}: {}",
            format!("Reading {} from file", title).blue(),
            path.display()
        );
        Ok(std::fs::read_to_string(path)?.trim().to_string())
    } else {
        Ok(file_or_string.trim().to_string())
    }
}
