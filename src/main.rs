use clap::Parser;
use puzzlebox::{init_logging, run, Cli, BUILD_DATE, VERSION};
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!(version = VERSION, build_date = BUILD_DATE, "Starting puzzlebox");

    match run(&cli) {
        Ok(summary) => {
            let dims = &summary.dimensions;
            println!("Generated {}", summary.path.display());
            println!(
                "Dimensions: {:.0}x{:.0}x{:.0} mm",
                dims.width, dims.depth, dims.height
            );
            println!(
                "Template: {}x{} mm, {} paths",
                summary.width, summary.height, summary.paths
            );
        }
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}
