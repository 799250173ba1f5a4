//! Wordle Daily - CLI
//!
//! Plays the daily word game in the terminal and inspects its state.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    commands::{Session, audit_lists, check_guess, run_play, sync_stores, today},
    config::{ConfigStore, FileConfigStore, GameConfig, ScheduleConfig},
    core::GameLocale,
    output::{print_audit, print_check, print_stats, print_sync, print_today},
    persist::load_stats,
    storage::FileStore,
    wordlists::{ANSWERS, GUESSES, Validator, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word game with hard mode, streaks and shareable results",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game locale: en_US, en_GB, fr_FR, et_EE, lv_LV, lv_LV@simplified
    #[arg(short, long, global = true)]
    locale: Option<GameLocale>,

    /// Require every guess to reuse revealed hints
    #[arg(long, global = true)]
    hard_mode: bool,

    /// Blank the first row of the share snippet
    #[arg(long, global = true)]
    hide_first_row: bool,

    /// Roll over at midnight this many seconds east of UTC instead of local midnight
    #[arg(long, global = true, allow_negative_numbers = true, conflicts_with = "bucket")]
    utc_offset: Option<i32>,

    /// Start a new turn every N seconds (for testing)
    #[arg(long, global = true)]
    bucket: Option<u32>,

    /// Answer list, one word per line (needs --guesses)
    #[arg(long, global = true, requires = "guesses")]
    answers: Option<PathBuf>,

    /// Accepted guess list, one word per line (needs --answers)
    #[arg(long, global = true, requires = "answers")]
    guesses: Option<PathBuf>,

    /// Directory for saved turns and statistics
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's word (default)
    Play,

    /// Score a guess against a secret word
    Check {
        /// The guess
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Show the current turn number and time until the next word
    Today,

    /// Show saved statistics
    Stats,

    /// Check the word lists for problems
    Audit,

    /// Merge saved progress from another data directory
    Sync {
        /// Data directory to read from
        from: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Save it as the new default
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_store = cli
        .config
        .as_ref()
        .map_or_else(FileConfigStore::new, FileConfigStore::with_path);
    let config = apply_overrides(config_store.load(), &cli);
    debug!(?config, "effective configuration");

    let store = cli
        .data_dir
        .as_ref()
        .map_or_else(FileStore::new, FileStore::with_dir);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(config, &cli, &store),
        Commands::Check { guess, secret } => {
            let result = check_guess(guess, secret, config.locale)?;
            print_check(&result);
            Ok(())
        }
        Commands::Today => {
            print_today(&today(&config.turn_scheduler(), Utc::now()));
            Ok(())
        }
        Commands::Stats => {
            let stats = load_stats(&store)
                .context("reading statistics")?
                .unwrap_or_default();
            print_stats(&stats);
            Ok(())
        }
        Commands::Audit => run_audit_command(&config, &cli),
        Commands::Sync { from } => {
            let report = sync_stores(&store, &FileStore::with_dir(from))
                .with_context(|| format!("syncing from {}", from.display()))?;
            print_sync(&report);
            Ok(())
        }
        Commands::Config { save } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if *save {
                config_store
                    .save(&config)
                    .with_context(|| format!("writing {}", config_store.path().display()))?;
                println!("Saved to {}", config_store.path().display());
            }
            Ok(())
        }
    }
}

/// Command-line flags win over the configuration file
fn apply_overrides(mut config: GameConfig, cli: &Cli) -> GameConfig {
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if cli.hard_mode {
        config.hard_mode = true;
    }
    if cli.hide_first_row {
        config.hide_first_row = true;
    }
    if let Some(offset) = cli.utc_offset {
        config.scheduler = ScheduleConfig::Calendar {
            utc_offset_secs: Some(offset),
        };
    }
    if let Some(secs) = cli.bucket {
        config.scheduler = ScheduleConfig::Bucket { secs };
    }
    config
}

#[instrument(level = "debug", skip(cli))]
fn load_validator(config: &GameConfig, cli: &Cli) -> Result<Validator> {
    match (&cli.answers, &cli.guesses) {
        (Some(answers), Some(guesses)) => {
            Validator::from_files(config.locale, answers, guesses, config.seed).with_context(|| {
                format!(
                    "loading word lists {} and {}",
                    answers.display(),
                    guesses.display()
                )
            })
        }
        _ => Ok(Validator::bundled(config.locale, config.seed)),
    }
}

fn run_play_command(config: GameConfig, cli: &Cli, store: &FileStore) -> Result<()> {
    let validator = load_validator(&config, cli)?;
    let mut session = Session::open(config, validator, store, Utc::now())
        .with_context(|| format!("opening today's turn in {}", store.dir().display()))?;
    run_play(&mut session)
}

fn run_audit_command(config: &GameConfig, cli: &Cli) -> Result<()> {
    let (answers, guesses) = match (&cli.answers, &cli.guesses) {
        (Some(answers), Some(guesses)) => (read_list(answers)?, read_list(guesses)?),
        _ if matches!(config.locale, GameLocale::EnUs | GameLocale::EnGb) => (
            ANSWERS.iter().map(|w| (*w).to_string()).collect(),
            GUESSES.iter().map(|w| (*w).to_string()).collect(),
        ),
        _ => bail!(
            "no bundled word lists for {}; pass --answers and --guesses",
            config.locale
        ),
    };

    let report = audit_lists(config.locale, &answers, &guesses, true);
    print_audit(&report);
    Ok(())
}

fn read_list(path: &Path) -> Result<Vec<String>> {
    load_from_file(path).with_context(|| format!("reading {}", path.display()))
}
