use anyhow::Context;
use casp_dashboard::cli::Args;
use casp_dashboard::{DashboardError, DashboardGenerator, logging};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();
    logging::init(args.get_log_level(), args.quiet);

    let runtime = match tokio::runtime::Runtime::new().context("Failed to create async runtime") {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    };

    let result: casp_dashboard::Result<_> = runtime.block_on(async {
        let generator = DashboardGenerator::new(args.to_config())?;

        tokio::select! {
            result = generator.generate() => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, stopping before the dashboard is written");
                Err(DashboardError::interrupted("Generation interrupted by user"))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Summary has already been reported by the generator
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
