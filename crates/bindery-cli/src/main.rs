mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_FAILURE, EXIT_PROJECT_ERROR};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "bindery",
    version,
    about = "Resource Container reader and legacy translation-project converter"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a legacy translation-studio project into a Resource Container manifest.
    Convert {
        /// Path to the legacy project directory.
        path: PathBuf,
        /// Directory to write manifest.yaml into (prints to stdout when omitted).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Inspect a Resource Container's resolved manifest.
    Inspect {
        /// Path to the container directory.
        path: PathBuf,
    },
    /// List a project's chapter directories.
    Chapters {
        /// Path to the container directory.
        path: PathBuf,
        /// Project identifier (defaults to the sole project).
        #[arg(long)]
        project: Option<String>,
    },
    /// List the chunk files of a chapter.
    Chunks {
        /// Path to the container directory.
        path: PathBuf,
        /// Project identifier.
        project: String,
        /// Chapter identifier (defaults to the project identifier).
        #[arg(long)]
        chapter: Option<String>,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("BINDERY_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    let json = cli.json;
    let result = match cli.command {
        Commands::Convert { path, output } => {
            commands::convert::run(&path, output.as_deref(), json)
        }
        Commands::Inspect { path } => commands::inspect::run(&path, json),
        Commands::Chapters { path, project } => {
            commands::chapters::run(&path, project.as_deref(), json)
        }
        Commands::Chunks {
            path,
            project,
            chapter,
        } => commands::chunks::run(&path, &project, chapter.as_deref(), json),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.contains("is not a valid project") {
                EXIT_PROJECT_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
