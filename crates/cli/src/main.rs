mod commands;
mod config;
mod input;

use clap::{Parser, Subcommand};
use mini_bio::DocumentFormat;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::CliConfig;

#[derive(Parser)]
#[command(name = "minibio")]
#[command(about = "MiniBio content model checker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check documents against the MiniBio shape
    Check {
        /// Files to check ('-' reads stdin)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Document format (defaults to the file extension)
        #[arg(long)]
        format: Option<DocumentFormat>,
    },
    /// Convert a MiniBio document between YAML and JSON
    Convert {
        /// File to convert ('-' reads stdin)
        path: PathBuf,
        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<DocumentFormat>,
        /// Output format
        #[arg(long)]
        to: DocumentFormat,
    },
    /// Check a presentation variant tag
    Variant {
        /// Tag to check (hero or card)
        tag: String,
    },
    /// Check a language code
    Language {
        /// Code to check
        code: String,
    },
    /// List recognised language codes
    Languages,
}

/// Entry point for the `minibio` CLI.
///
/// # Environment Variables
/// - `MINIBIO_DEFAULT_FORMAT`: format for stdin and unrecognised extensions (default: "yaml")
/// - `RUST_LOG`: log filter (default: "minibio=info")
fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("minibio=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env()?;
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    let ok = match cli.command {
        Some(Commands::Check { paths, format }) => {
            let inputs = paths
                .iter()
                .map(|path| input::read_input(path, format, &config))
                .collect::<anyhow::Result<Vec<_>>>()?;
            commands::check(&inputs, &mut stdout)?
        }
        Some(Commands::Convert { path, from, to }) => {
            let input = input::read_input(&path, from, &config)?;
            commands::convert(&input, to, &mut stdout)?;
            true
        }
        Some(Commands::Variant { tag }) => commands::variant(&tag, &mut stdout)?,
        Some(Commands::Language { code }) => commands::language(&code, &mut stdout)?,
        Some(Commands::Languages) => {
            commands::languages(&mut stdout)?;
            true
        }
        None => {
            writeln!(stdout, "Use 'minibio --help' for commands")?;
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
