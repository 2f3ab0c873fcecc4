use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Verbosity has to be known before clap runs, so peek at the raw args.
    let verbose = std::env::args().any(|arg| arg == "--verbose" || arg == "-v");
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    clrstubs::cli::run_cli()
}
