use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pyembed_lib::config::BuildMode;

mod cmd;
mod output;

use output::{OutputFormat, print_error};

/// pyembed - locate and stage an embedded Python runtime for a host build
#[derive(Parser)]
#[command(name = "pyembed")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose (debug) logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Options shared by every command that runs the engine.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
  /// Config file (default: ./pyembed.toml if present, else built-in defaults)
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// Target platform triple (default: the host platform)
  #[arg(short, long)]
  pub target: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the full pipeline and print the build description
  Configure {
    #[command(flatten)]
    engine: EngineArgs,

    /// Kind of host build
    #[arg(short, long, value_enum, default_value_t = Mode::Game)]
    mode: Mode,

    /// Minor version of the host engine, enables conditional module rules
    #[arg(long)]
    host_minor: Option<u32>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Find the runtime installation and link library
  Locate {
    #[command(flatten)]
    engine: EngineArgs,
  },

  /// List redistributable files that would be staged
  Bundle {
    #[command(flatten)]
    engine: EngineArgs,

    /// Print the manifest as JSON
    #[arg(long)]
    json: bool,
  },

  /// Copy redistributable files into an output directory
  Stage {
    #[command(flatten)]
    engine: EngineArgs,

    /// Binary output directory to copy into
    #[arg(short, long)]
    out: PathBuf,
  },

  /// Show platform information
  Info {
    #[command(flatten)]
    engine: EngineArgs,
  },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Mode {
  Game,
  Editor,
}

impl From<Mode> for BuildMode {
  fn from(mode: Mode) -> Self {
    match mode {
      Mode::Game => BuildMode::Game,
      Mode::Editor => BuildMode::Editor,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli.command) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(command: Commands) -> Result<()> {
  match command {
    Commands::Configure {
      engine,
      mode,
      host_minor,
      format,
    } => cmd::cmd_configure(&engine, mode.into(), host_minor, format),
    Commands::Locate { engine } => cmd::cmd_locate(&engine),
    Commands::Bundle { engine, json } => cmd::cmd_bundle(&engine, json),
    Commands::Stage { engine, out } => cmd::cmd_stage(&engine, &out),
    Commands::Info { engine } => cmd::cmd_info(&engine),
  }
}
