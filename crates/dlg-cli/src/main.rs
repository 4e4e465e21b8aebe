//! CLI frontend for the dialog record builder.

mod commands;
mod config;
mod entry;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "dlg",
    about = "Build scripted-dialog records from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file of extra actor names (`{"name": mask}`), overlaid on the defaults
    #[arg(long, global = true)]
    actors: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one dialog record from flags
    Build {
        /// Actor allowed to speak (name, decimal, or 0x hex); repeat to combine
        #[arg(short, long = "speaker")]
        speakers: Vec<String>,

        /// State the line is valid from
        #[arg(long, conflicts_with = "state")]
        pre: Option<String>,

        /// State entered after the line is chosen
        #[arg(long, conflicts_with = "state")]
        post: Option<String>,

        /// Pre- and post-state together
        #[arg(long, num_args = 2, value_names = ["PRE", "POST"])]
        state: Option<Vec<String>>,

        /// Display text
        #[arg(short, long)]
        text: Option<String>,

        /// Condition list as a JSON array of operations
        #[arg(long)]
        conditions: Option<String>,

        /// Consequence list as a JSON array of operations
        #[arg(long)]
        consequences: Option<String>,
    },

    /// Build every entry of a JSON file into records
    Batch {
        /// JSON file holding an array of entries
        file: PathBuf,
    },

    /// List the known actor names and their flags
    Actors,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,dlg_core=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = CliConfig::load(cli.actors.as_deref()).and_then(|config| {
        let config = config.with_pretty(cli.pretty);
        match cli.command {
            Commands::Build {
                speakers,
                pre,
                post,
                state,
                text,
                conditions,
                consequences,
            } => {
                let (pre, post) = match state.as_deref() {
                    Some([pre, post]) => (Some(pre.clone()), Some(post.clone())),
                    _ => (pre, post),
                };
                commands::build::run(
                    &config,
                    commands::build::BuildArgs {
                        speakers,
                        pre,
                        post,
                        text,
                        conditions,
                        consequences,
                    },
                )
            }
            Commands::Batch { file } => commands::batch::run(&config, &file),
            Commands::Actors => commands::actors::run(&config),
        }
    });

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
