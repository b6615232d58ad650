//! sratools CLI entry point.

#![allow(clippy::print_stderr)]

use sratools::constants::exit_code;

fn main() {
    match sratools::run() {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::FAILURE);
        }
    }
}
