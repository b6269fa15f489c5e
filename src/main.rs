#![forbid(unsafe_code)]
//! Quizdeck Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use quizdeck::commands::{
    execute_cycle, execute_freq, execute_play, execute_sources, execute_stats, execute_tags,
    CycleOptions, FreqSubcommand, PlayOptions, SourcesOptions, StatsOptions, TagsSubcommand,
};
use quizdeck::config::DEFAULT_CONFIG_FILE;
use quizdeck::{Config, GeneratorFrequency, TagUsage};

#[derive(Parser)]
#[command(name = "quizdeck")]
#[command(about = "Tag-filtered, frequency-weighted trivia question shuffler")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Question database directory (overrides config)
    #[arg(long, global = true, env = "QUIZDECK_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve questions from the shuffled cycle
    Play {
        /// Number of questions
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Show answers
        #[arg(long)]
        reveal: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview one freshly built cycle
    Cycle {
        /// Seed for a reproducible preview
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage tag filters
    Tags {
        #[command(subcommand)]
        cmd: TagsCommands,
    },

    /// Manage generator frequencies
    Freq {
        #[command(subcommand)]
        cmd: FreqCommands,
    },

    /// List question databases
    Sources {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show activation and selection diagnostics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum TagsCommands {
    /// List tags with their usage
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a tag's usage
    Set {
        /// Tag name (parent or parent::child)
        tag: String,

        /// none, some or all
        usage: TagUsage,
    },

    /// Step a tag through none → some → all
    Toggle {
        /// Tag name
        tag: String,
    },
}

#[derive(Subcommand)]
enum FreqCommands {
    /// List generators with their frequency
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a generator's frequency
    Set {
        /// Generator id
        id: String,

        /// rare, default or frequent
        frequency: GeneratorFrequency,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let mut config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{} Failed to read {}: {}",
                style("✗").red(),
                cli.config.display(),
                e
            );
            std::process::exit(1);
        }
    };
    if let Some(questions) = cli.questions {
        config.sources_dir = questions;
    }

    match cli.command {
        Commands::Play { count, seed, reveal, json } => {
            let options = PlayOptions { count, seed, reveal, json };
            execute_play(options, config)?;
        }

        Commands::Cycle { seed, json } => {
            let options = CycleOptions { seed, json };
            execute_cycle(options, config)?;
        }

        Commands::Tags { cmd } => {
            let subcommand = match cmd {
                TagsCommands::List { json } => TagsSubcommand::List { json },
                TagsCommands::Set { tag, usage } => TagsSubcommand::Set { tag, usage },
                TagsCommands::Toggle { tag } => TagsSubcommand::Toggle { tag },
            };
            execute_tags(subcommand, config)?;
        }

        Commands::Freq { cmd } => {
            let subcommand = match cmd {
                FreqCommands::List { json } => FreqSubcommand::List { json },
                FreqCommands::Set { id, frequency } => FreqSubcommand::Set { id, frequency },
            };
            execute_freq(subcommand, config)?;
        }

        Commands::Sources { json } => {
            execute_sources(SourcesOptions { json }, config)?;
        }

        Commands::Stats { json } => {
            execute_stats(StatsOptions { json }, config)?;
        }
    }

    Ok(())
}
