mod app;
mod clipboard;
mod color;
mod config;
mod i18n;
mod input;
mod palettes;
mod share;
mod storage;
mod store;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "swatchbox", version, about = "Color picker, converter and palette TUI")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print a color as HEX, RGB, HSL and RGBA (headless).
    Convert {
        /// Any CSS color: hex, rgb(), rgba(), hsl(), hsla() or a name.
        color: String,
    },
    /// Manage saved favorite colors (headless).
    Favorites {
        #[command(subcommand)]
        cmd: FavoritesCommand,
    },
    /// Print the curated palettes (headless).
    Palettes,
}

#[derive(Debug, Subcommand)]
enum FavoritesCommand {
    /// List favorites, newest first.
    List,
    /// Save a color.
    Add { color: String },
    /// Remove a saved color (exact match).
    Remove { color: String },
}

const LOG_ENV: &str = "SWATCHBOX_LOG";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The TUI owns the terminal, so its logs go to a file.
fn init_file_logging(cfg: &config::Config) -> anyhow::Result<()> {
    let path = cfg.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_file_logging(&cfg).context("init logging")?;
            tracing::info!(config = %cfg_path.display(), "starting");
            let mut app = app::App::new(cfg.clone(), cfg_path)?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Convert { color } => {
            init_stderr_logging();
            let parsed = color::Color::parse(&color).with_context(|| format!("parse {color:?}"))?;
            print_formats(&color::Formats::from_color(&parsed));
        }
        Command::Favorites { cmd } => {
            init_stderr_logging();
            let storage = storage::Storage::open(&cfg.database_path()).context("open storage")?;
            let mut store = store::Store::open(storage);
            match cmd {
                FavoritesCommand::List => {
                    if store.favorites().is_empty() {
                        println!("{}", store.translate(i18n::Key::NoFavorites));
                    }
                    for (i, c) in store.favorites().iter().enumerate() {
                        println!("{:02}. {c}", i + 1);
                    }
                }
                FavoritesCommand::Add { color } => {
                    color::Color::parse(&color).with_context(|| format!("parse {color:?}"))?;
                    store.add_favorite(&color).context("save favorites")?;
                    println!("Saved {color}.");
                }
                FavoritesCommand::Remove { color } => {
                    if !store.favorites().contains(&color) {
                        anyhow::bail!("{color} is not a favorite");
                    }
                    store.remove_favorite(&color).context("save favorites")?;
                    println!("Removed {color}.");
                }
            }
        }
        Command::Palettes => {
            init_stderr_logging();
            for p in palettes::PALETTES {
                println!("{:<18} {}", p.name, p.colors.join("  "));
            }
        }
    }

    Ok(())
}

fn print_formats(formats: &color::Formats) {
    for kind in color::FormatKind::ALL {
        println!("{:<5} {}", kind.label(), formats.get(kind));
    }
}
