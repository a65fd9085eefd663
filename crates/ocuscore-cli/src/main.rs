use clap::Parser;
use eyre::Result;
use ocuscore_cli::cli::{Cli, Commands};
use ocuscore_cli::{commands, config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = config::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Score(args) => {
            let output = commands::run_score(args, &config)?;
            match &args.output {
                Some(path) => {
                    std::fs::write(path, &output)?;
                    tracing::info!(path = %path.display(), "output written");
                }
                None => println!("{output}"),
            }
        }
        Commands::Rules => {
            println!("{}", commands::run_rules()?);
        }
    }

    Ok(())
}
