use clap::Parser;
use tracing_subscriber::EnvFilter;

use simscore::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("simscore=debug,info")
    } else {
        EnvFilter::new("simscore=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Bench(args) => {
            cli::bench::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Aliases(args) => {
            cli::aliases::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
