// inirs/src/main.rs

use std::process::ExitCode;

fn main() -> ExitCode {
    match inirs::cli::run() {
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
