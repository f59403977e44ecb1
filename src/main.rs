use std::process::ExitCode;

use linear_collections::errors::{get_exit_code, EXIT_SUCCESS};

fn main() -> ExitCode {
    match linear_collections::cli::run() {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(get_exit_code(&e))
        }
    }
}
