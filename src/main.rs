use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use pkgscribe::commands;
use pkgscribe::config::Config;
use pkgscribe::gemini;
use pkgscribe::logging::{self, LogFormat};
use pkgscribe::package::{parse_package_name, PackageName};
use pkgscribe::paths::Layout;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Generate docs and test suites for npm packages with Gemini", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root holding prompts/, docs/ and tests/
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Markdown documentation into docs/
    #[command(after_help = "Example: pkgscribe generate @rescui/use-glow-hover")]
    Generate(GenerateArgs),

    /// Generate a test suite into tests/, using docs/ as context
    #[command(after_help = "Example: pkgscribe generate-tests @rescui/use-glow-hover")]
    GenerateTests(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// npm package name, e.g. @rescui/use-glow-hover
    #[arg(value_parser = parse_package_name)]
    package: PackageName,

    /// Prompt template to use instead of the one under prompts/
    #[arg(long)]
    template: Option<PathBuf>,

    /// Gemini model to use instead of the configured one
    #[arg(long)]
    model: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let dotenv = dotenvy::dotenv();
    logging::init_logging(cli.log_format, cli.verbose);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.root)?;
    let layout = Layout::new(cli.root, config.layout.clone());

    match cli.command {
        Commands::Generate(args) => {
            let client = gemini::connect(&config.gemini, args.model.as_deref())?;
            commands::generate::execute(
                &layout,
                &args.package,
                args.template.as_deref(),
                &client,
            )?;
        }
        Commands::GenerateTests(args) => {
            let client = gemini::connect(&config.gemini, args.model.as_deref())?;
            commands::generate_tests::execute(
                &layout,
                &args.package,
                args.template.as_deref(),
                &client,
            )?;
        }
    }

    Ok(())
}
