use anyhow::Context;
use clap::Parser;
use storm_config::StormConfig;
use storm_schema::PayloadRegistry;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("stormdrain error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = StormConfig::load_with_dotenv().context("failed to load stormdrain config")?;
    init_tracing(&flags, &config.log.level)?;

    let registry = PayloadRegistry::with_limits(config.decoder.limits());

    match &cli.command {
        cli::Commands::Decode(args) => commands::decode::handle(args, &registry, &flags),
        cli::Commands::Schema(args) => commands::schema::handle(args, &registry, &flags),
        cli::Commands::List => commands::list::handle(&registry, &flags),
    }
}

fn init_tracing(flags: &cli::GlobalFlags, configured: &str) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STORMDRAIN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
