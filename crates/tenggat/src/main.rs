//! CLI entry point for tenggat.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::FmtSpan};

use tenggat_app::{AppConfig, EventList, TaskBoard};
use tenggat_core::SystemClock;
use tenggat_store::{FileStore, KeyValueStore, MemoryStore, TaskRepository};

mod commands;
mod tui;

/// Deadline-sorted personal task list.
#[derive(Parser, Debug)]
#[command(
    name = "tenggat",
    version,
    about = "tenggat: personal tasks sorted by deadline, with a calendar view"
)]
struct Cli {
    /// Configuration file (defaults to the per-user config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the task store (overrides storage.dir).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep tasks in memory only; nothing is written to disk.
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task due on a date.
    Add {
        #[arg(long)]
        text: String,
        /// Due date, YYYY-MM-DD.
        #[arg(long)]
        due: String,
    },

    /// List tasks sorted by deadline, or only those due on one date.
    Ls {
        /// Only tasks due on this date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
        #[arg(long, value_enum, default_value_t = LsFormat::Table)]
        format: LsFormat,
    },

    /// Replace the text and due date of a task.
    ///
    /// Leaving either field out cancels the edit.
    Edit {
        /// Task id or unique id prefix.
        #[arg(long)]
        task: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },

    /// Delete a task after confirmation.
    Rm {
        /// Task id or unique id prefix.
        #[arg(long)]
        task: String,
        /// Skip the confirmation question.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Toggle the completed flag of a task.
    Done {
        /// Task id or unique id prefix.
        #[arg(long)]
        task: String,
    },

    /// Print calendar events as JSON.
    Calendar,

    /// Launch interactive terminal UI.
    Tui,
}

/// Output format of `ls`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LsFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let Cli {
        config,
        data_dir,
        ephemeral,
        cmd,
    } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Tui);

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let config = AppConfig::load(config.as_deref())?;
    execute_command(&config, data_dir.as_deref(), ephemeral, cmd)
}

fn execute_command(config: &AppConfig, data_dir: Option<&Path>, ephemeral: bool, command: Command) -> Result<()> {
    let store = open_store(config, data_dir, ephemeral)?;
    let repository = TaskRepository::with_key(store, config.storage.key.clone());
    let mut board =
        TaskBoard::open(repository, SystemClock, EventList::default()).context("failed to load tasks")?;

    match command {
        Command::Tui => tui::run(board, &config.tui),
        other => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            commands::run(other, &mut board, &mut stdout.lock(), &mut stdin.lock())
        }
    }
}

fn open_store(config: &AppConfig, data_dir: Option<&Path>, ephemeral: bool) -> Result<Box<dyn KeyValueStore>> {
    if ephemeral {
        return Ok(Box::new(MemoryStore::new()));
    }
    let dir = config.storage.resolve_dir(data_dir)?;
    let store = FileStore::open(&dir).with_context(|| format!("failed to open store at {}", dir.display()))?;
    Ok(Box::new(store))
}

const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Tui)
}

/// `directives` in `RUST_LOG` syntax, falling back to INFO when there are none.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn install_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
