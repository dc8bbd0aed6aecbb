use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sarif_dedup::cli::{self, Cli};
use sarif_dedup::{dedup, engine, report};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("sarif_dedup=debug")
    } else if cli.quiet {
        EnvFilter::new("sarif_dedup=error")
    } else {
        EnvFilter::new("sarif_dedup=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        cli::Commands::Dedup(args) => {
            let mut log = engine::load_log(&args.input)?;
            let stats = engine::dedup_log(&mut log);

            let output = args.output_path();
            engine::save_log(&log, &output, args.compact)?;

            // Keep stdout clean when the document itself goes there
            if output != std::path::Path::new("-") && !cli.quiet {
                report::terminal::render_summary(&stats);
            }
        }
        cli::Commands::Stats(args) => {
            let log = engine::load_log(&args.input)?;
            let tallies = dedup::tally_by_rule(log.runs[0].results());
            report::terminal::render_rule_table(&tallies);
        }
    }

    Ok(())
}
