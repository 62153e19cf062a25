use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "github-deployment-resource")]
#[command(about = "Pipeline resource tracking GitHub deployments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report new deployment versions (request on stdin)
    Check,
    /// Write a deployment version into a directory (request on stdin)
    In {
        /// Destination directory
        dest: PathBuf,
    },
}

const SUBCOMMANDS: [&str; 2] = ["check", "in"];

/// Arguments with the subcommand taken from the program name when invoked
/// as `/opt/resource/check` or `/opt/resource/in`
fn normalize_args(mut args: Vec<OsString>) -> Vec<OsString> {
    let program = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string);

    let has_subcommand = args
        .get(1)
        .and_then(|arg| arg.to_str())
        .is_some_and(|arg| SUBCOMMANDS.contains(&arg));

    if let Some(name @ ("check" | "in")) = program.as_deref() {
        if !has_subcommand {
            args.insert(1, OsString::from(name));
        }
    }
    args
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries the protocol response, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os().collect())) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = match cli.command {
        Commands::Check => cli::check::run().await,
        Commands::In { dest } => cli::input::run(&dest).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
