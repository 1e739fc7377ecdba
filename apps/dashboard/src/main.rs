//! # Agri Dashboard Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line arguments
//! 2. Load configuration (defaults, file, environment)
//! 3. Initialize tracing (logging)
//! 4. Build the store and the data layer
//! 5. Wait for every resource and print the overview

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match agri_dashboard::run(std::env::args().skip(1)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("agri-dashboard: {e}");
            ExitCode::FAILURE
        }
    }
}
