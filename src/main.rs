//! Phone Extractor - command-line entry point.
//!
//! Results go to stdout (or a file with `--output`); logs go to stderr.

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use phone_extractor::output::{render_json, render_lines, write_to_file};
use phone_extractor::{
    Config, Extractor, FileSource, ResultSet, StdinSource, Timer, UnreadablePolicy,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "phone-extractor",
    version,
    about = "Extract Russian phone numbers from text as +7(XXX)XXX-XX-XX"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Print results as a JSON array instead of lines
    #[arg(long, global = true)]
    json: bool,
    /// Fail when an input file cannot be read instead of skipping it
    #[arg(long, global = true)]
    fail_fast: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract numbers from text typed on standard input
    FromText(OutputArgs),
    /// Extract numbers from a single text file
    FromFile(FromFileArgs),
    /// Extract numbers from several text files
    FromFiles(FromFilesArgs),
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// File to save the results to
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct FromFileArgs {
    input_file: PathBuf,
    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Debug, Args)]
struct FromFilesArgs {
    input_files: Vec<PathBuf>,
    #[command(flatten)]
    out: OutputArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("load configuration")?;
    if cli.fail_fast {
        config.on_unreadable = UnreadablePolicy::Abort;
    }

    // Initialize logging (stderr only, stdout carries results)
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(
        max_concurrent_reads = config.max_concurrent_reads,
        on_unreadable = %config.on_unreadable,
        "Configuration loaded"
    );

    let extractor = Extractor::new(&config);
    let timer = Timer::new("extract");

    let (phones, output, header) = match cli.command {
        Command::FromText(out) => {
            eprintln!("Enter text (Ctrl+D to finish):");
            let phones = extractor
                .extract_source(&StdinSource)
                .await
                .context("read text from standard input")?;
            (phones, out.output, None)
        }
        Command::FromFile(args) => {
            let phones = extractor
                .extract_source(&FileSource::new(&args.input_file))
                .await
                .with_context(|| format!("extract from {}", args.input_file.display()))?;
            (phones, args.out.output, None)
        }
        Command::FromFiles(args) => {
            if args.input_files.is_empty() {
                println!("No input files given.");
                return Ok(());
            }
            let phones = extractor
                .extract_files(&args.input_files)
                .await
                .context("extract from input files")?;
            let header = format!("Found {} unique numbers:", phones.len());
            (phones, args.out.output, Some(header))
        }
    };

    timer.finish();
    debug!("{}", extractor.metrics().summary());

    if cli.json && output.is_none() {
        println!("{}", render_json(&phones).context("encode results")?);
    } else {
        emit(&phones, output.as_deref(), header).await?;
    }

    info!("Done");
    Ok(())
}

/// Print or save the results.
async fn emit(phones: &ResultSet, output: Option<&Path>, header: Option<String>) -> Result<()> {
    if phones.is_empty() {
        println!("No phone numbers found.");
        return Ok(());
    }

    match output {
        Some(path) => write_to_file(phones, path)
            .await
            .with_context(|| format!("save results to {}", path.display()))?,
        None => {
            println!(
                "{}",
                header.unwrap_or_else(|| "Found numbers:".to_string())
            );
            print!("{}", render_lines(phones));
        }
    }

    Ok(())
}
