use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "changesort")]
#[command(about = "Sort a versioned changelog into additions, removals, changes and fixes")]
struct Cli {
    /// Log debug output (overridden by CHANGESORT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort the changelog for the configured version
    Sort {
        /// Config file (default: changesort.toml in the working directory, if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Version to sort
        #[arg(long = "version", value_name = "VERSION")]
        changelog_version: Option<String>,

        /// Product name for the title line
        #[arg(long)]
        product: Option<String>,

        /// Directory containing the raw changelog
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Directory to write the sorted changelog to
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Print the sorted changelog instead of writing the output file
        #[arg(long)]
        stdout: bool,
    },

    /// Print a default config file
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Config => {
            print!("{}", changesort::config_template());
        }
        Command::Sort {
            config,
            changelog_version,
            product,
            input_dir,
            output_dir,
            stdout,
        } => {
            let cwd = std::env::current_dir().context("failed to read working directory")?;
            let mut config = changesort::SortConfig::discover(config.as_deref(), &cwd)?;
            if let Some(version) = changelog_version {
                config.version = version;
            }
            if let Some(product) = product {
                config.product = product;
            }
            if let Some(dir) = input_dir {
                config.input_dir = dir;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }

            if stdout {
                let generated_at = changesort::timestamp(&config.timestamp_format)?;
                let files = changesort::ChangelogFiles::from_config(&config);
                let (_, lines) = changesort::sort_changelog(&config, &files, &generated_at)?;
                changesort::write_lines(std::io::stdout().lock(), &lines)
                    .context("failed to write to stdout")?;
            } else {
                changesort::execute(&config)?;
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "changesort=debug" } else { "changesort=info" };
    let filter =
        EnvFilter::try_from_env("CHANGESORT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
