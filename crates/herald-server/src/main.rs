use clap::Parser;
use herald_server::{bootstrap, logging, server};

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("heraldd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.quiet, cli.verbose)?;

    let mut config = bootstrap::load_config(cli.config.as_deref())?;
    cli.apply(&mut config.server);

    let ctx = bootstrap::build_context(&config)?;
    server::run(ctx, &config.server).await
}
