use clap::Parser;
use flash_fill::cli::commands::{FillOptions, cmd_fill, cmd_profile, cmd_resolve, cmd_scan};
use flash_fill::cli::config::{Cli, Commands, load_config};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref());

    // Resolve store dir: CLI > config > default
    let store_dir = cli.store_dir.clone().unwrap_or(config.store.dir.clone());

    let output = match cli.command {
        Commands::Fill {
            page,
            output,
            seed,
            profile,
            trace,
            format,
        } => {
            let options = FillOptions {
                output,
                seed: seed.or(config.fill.seed),
                profile,
                trace: trace.or(config.fill.trace.clone()),
                format: format.unwrap_or(config.fill.format.clone()),
            };
            cmd_fill(&page, &options, &store_dir)?
        }
        Commands::Scan { page } => cmd_scan(&page)?,
        Commands::Resolve {
            key,
            input_type,
            tag,
            seed,
        } => cmd_resolve(&key, &input_type, &tag, seed.or(config.fill.seed), &store_dir)?,
        Commands::Profile { action } => cmd_profile(&action, &store_dir)?,
    };

    print!("{}", output);
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
