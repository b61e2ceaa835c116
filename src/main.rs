use anyhow::Result;
use clap::Parser;
use tracing::{error, warn};

use bitsquat::{analysis, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    // 130 = 128 + SIGINT(2), standard exit code for Ctrl-C. Output already
    // streamed to stdout is left as-is.
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nInterrupted");
        std::process::exit(130);
    }) {
        warn!(
            action = "setup",
            component = "signal_handler",
            error = %e,
            "Failed to set Ctrl-C handler"
        );
    }

    match analysis::run_analysis(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
