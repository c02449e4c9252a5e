mod commands;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagekit")]
#[command(version, about = "pagekit CLI - landing page form validation and behavior runtime", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a value against one or more validation rules
    Validate {
        /// Value to check
        value: String,

        /// Rule to apply: required[:subject], email, min-length:N[:subject]
        #[arg(short, long = "rule", default_value = "required")]
        rules: Vec<String>,
    },

    /// Replay a scripted page session and print the resulting page state
    Replay {
        /// TOML script with a [layout] table and [[step]] entries
        script: PathBuf,

        /// Config file (defaults to pagekit.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Make the simulated transport fail with this reason
        #[arg(long)]
        fail_transport: Option<String>,
    },

    /// Print the effective configuration
    Config {
        /// Config file (defaults to pagekit.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { value, rules } => {
            if !commands::validate::execute(&value, &rules)? {
                std::process::exit(1);
            }
        }
        Commands::Replay {
            script,
            config,
            fail_transport,
        } => {
            commands::replay::execute(&script, config.as_deref(), fail_transport)?;
        }
        Commands::Config { config } => {
            commands::config::execute(config.as_deref())?;
        }
    }

    Ok(())
}
