use clap::Parser;
use ream_deposits::{
    apply::run_apply,
    cli::{Cli, Commands},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set the default log level to `info` if not set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Apply(cmd) => {
            info!("Applying pending deposits from {}", cmd.deposits.display());
            run_apply(&cmd)
        }
    }
}
