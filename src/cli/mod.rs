use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::spec::CommandNode;
use crate::zsh::{fpath, Generator};

mod completion;
mod dump;
mod generate;

#[derive(Parser)]
#[command(
    name = "zsh-compgen",
    version,
    about = "Generate zsh completion scripts from command tree specs"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a completion script from a TOML or JSON command spec
    Generate {
        /// Spec file (.toml or .json)
        spec: PathBuf,

        /// Program name for the #compdef line (default: the root command's name)
        #[arg(long)]
        program_name: Option<String>,

        /// Write _<program> into this directory instead of stdout
        #[arg(long, conflicts_with = "stdout")]
        output_dir: Option<PathBuf>,

        /// Print to stdout even if an output directory is configured
        #[arg(long)]
        stdout: bool,
    },
    /// Generate the completion script for zsh-compgen itself
    Completion {
        /// Write _zsh-compgen into this directory instead of stdout
        #[arg(long, conflicts_with = "stdout")]
        output_dir: Option<PathBuf>,

        /// Print to stdout even if an output directory is configured
        #[arg(long)]
        stdout: bool,
    },
    /// Print a spec file back in normalized form
    Dump {
        /// Spec file (.toml or .json)
        spec: PathBuf,

        /// Output format (ignored with --output, which follows the file extension)
        #[arg(long, value_enum, default_value_t = DumpFormat::Toml)]
        format: DumpFormat,

        /// Write the normalized spec to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    Toml,
    Json,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    init_tracing(cli.verbose, &config);

    match cli.command {
        Commands::Generate {
            spec,
            program_name,
            output_dir,
            stdout,
        } => {
            let output_dir = if stdout {
                None
            } else {
                output_dir.or_else(|| config.output_dir())
            };
            generate::generate_from_spec(&config, &spec, program_name, output_dir)?;
        }
        Commands::Completion { output_dir, stdout } => {
            let output_dir = if stdout {
                None
            } else {
                output_dir.or_else(|| config.output_dir())
            };
            completion::generate_self(&config, output_dir)?;
        }
        Commands::Dump {
            spec,
            format,
            output,
        } => {
            dump::dump_spec(&spec, format, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8, config: &Config) {
    let level = match verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the script, or write it as `_<program>` into `output_dir`.
fn emit(
    config: &Config,
    root: &CommandNode,
    program_name: &str,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let generator = Generator::with_tool(config.generator_name());

    let Some(dir) = output_dir else {
        let mut stdout = std::io::stdout().lock();
        generator
            .generate(root, program_name, &mut stdout)
            .context("Failed to write completion script to stdout")?;
        return Ok(());
    };

    let path = generator
        .write_completion_file(root, program_name, dir)
        .with_context(|| format!("Failed to write completion file into {}", dir.display()))?;
    println!("Wrote {}", path.display());

    if !fpath::is_on_fpath(dir) {
        eprintln!(
            "{} is not on $fpath; add `fpath=({} $fpath)` to ~/.zshrc before compinit",
            dir.display(),
            dir.display()
        );
    }

    Ok(())
}
