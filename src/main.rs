use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use nukita::config::Settings;
use nukita::ide::AnalysisHost;
use nukita::project::ShellFlavor;
use nukita::syntax::decode_lossy;

#[derive(Parser)]
#[command(name = "nukita")]
#[command(version, about = "NuKiTa: project tools for AdaScript")]
struct Cli {
    /// Settings file (defaults to ~/.nukita/settings.json)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Shell the run command is meant for
    #[arg(long, global = true, value_enum)]
    shell: Option<ShellFlavor>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project
    New {
        /// Project name, also the directory name
        #[arg(value_name = "NAME")]
        name: String,

        /// Directory to create the project in
        #[arg(short, long, default_value = ".")]
        location: PathBuf,

        /// Interpreter executable, absolute or relative to the project
        #[arg(short, long)]
        interpreter: Option<String>,
    },

    /// Check brackets and string literals in a file
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List every line that mentions a symbol
    Refs {
        #[arg(value_name = "SYMBOL")]
        symbol: String,

        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Show where a function is defined
    Goto {
        #[arg(value_name = "SYMBOL")]
        symbol: String,

        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Print the command line that runs a file
    RunCmd {
        /// File to run; without one the interpreter is asked for help
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Print highlighting tokens of a file
    Highlight {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List recently opened projects
    Recent,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("nukita=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings_path = cli.settings.clone().or_else(Settings::default_path);
    let mut settings = settings_path
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    if cli.shell.is_some() {
        settings.shell = cli.shell;
    }

    let mut host = AnalysisHost::from_settings(&settings);
    let code = run(cli.command, &mut host)?;

    host.save_recent_into(&mut settings);
    if let Some(path) = &settings_path {
        if let Err(err) = settings.save(path) {
            warn!(error = %err, "could not save settings");
        }
    }
    Ok(code)
}

fn run(command: Commands, host: &mut AnalysisHost) -> Result<ExitCode> {
    match command {
        Commands::New {
            name,
            location,
            interpreter,
        } => {
            let project = host.create_project(&name, &absolute(&location), interpreter.as_deref())?;
            println!("{}", project.root.display());
        }

        Commands::Check { file } => {
            let text = read_source(&file)?;
            let diagnostics = host.check_syntax(&text, Some(&file));
            for diagnostic in &diagnostics {
                println!("{}:{diagnostic}", file.display());
            }
            if !diagnostics.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Refs { symbol, project } => {
            open(host, &project)?;
            let refs = host.find_references(&symbol);
            for line in &refs {
                println!("{line}");
            }
            info!(symbol = %symbol, count = refs.len(), "references");
        }

        Commands::Goto { symbol, project } => {
            open(host, &project)?;
            match host.goto_definition(&symbol) {
                Some(location) => println!("{location}"),
                None => {
                    eprintln!("no definition of `{symbol}`");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::RunCmd { file, project } => {
            open(host, &project)?;
            let command = host.run_command(file.as_deref())?;
            println!("{command}");
        }

        Commands::Highlight { file } => {
            let text = read_source(&file)?;
            for token in host.semantic_tokens(&text) {
                println!(
                    "{}:{} {} {:?}",
                    token.line + 1,
                    token.col + 1,
                    token.length,
                    token.token_type
                );
            }
        }

        Commands::Recent => {
            for root in host.recent_projects().iter() {
                println!("{}", root.display());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Recent entries are stored as absolute paths.
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn open(host: &mut AnalysisHost, path: &Path) -> Result<()> {
    if host.open_project(&absolute(path)).is_none() {
        bail!("{} is not a NuKiTa project (no marker file)", path.display());
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(decode_lossy(&bytes).into_owned())
}
