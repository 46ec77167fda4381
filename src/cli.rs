use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use crossterm::event::EventStream;
use tracing::info;

use crate::config::GameConfig;
use crate::core::catalog::WordCatalog;
use crate::core::clock::GameClock;
use crate::core::engine::Engine;
use crate::games::typing::TypingGame;
use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "kotoba-rain")]
#[command(about = "Type the Japanese words before they hit the ground")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the game (default)
    Play(PlayArgs),
    /// Print the built-in word list
    Words {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Fixed RNG seed for reproducible word order, positions and speeds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lives at the start of each game
    #[arg(long)]
    pub lives: Option<u32>,

    /// Milliseconds between two new words
    #[arg(long)]
    pub spawn_ms: Option<u64>,

    /// Motion updates per second
    #[arg(long)]
    pub tick_hz: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "kotoba_rain=trace" (defaults to RUST_LOG, then info)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl PlayArgs {
    /// Defaults overridden by whatever was given on the command line
    pub fn to_config(&self) -> Result<GameConfig> {
        let mut config = GameConfig::default();
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(lives) = self.lives {
            config.starting_lives = lives;
        }
        if let Some(spawn_ms) = self.spawn_ms {
            config.spawn_interval_ms = spawn_ms;
        }
        if let Some(tick_hz) = self.tick_hz {
            config.tick_hz = tick_hz;
        }
        config.validate()?;
        Ok(config)
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => play(args).await,
        Some(Commands::Words { json }) => {
            println!("{}", format_words(&WordCatalog::japanese(), json)?);
            Ok(())
        }
        None => play(PlayArgs::default()).await,
    }
}

async fn play(args: PlayArgs) -> Result<()> {
    let config = args.to_config()?;
    logging::init(args.log_file.as_deref(), args.log_level.as_deref())?;
    info!(?config, "starting kotoba-rain");

    let clock = GameClock::new(config.spawn_interval(), config.tick_interval());
    let game = TypingGame::new(config, WordCatalog::japanese());
    let mut engine = Engine::new(game, clock);

    let mut terminal = ratatui::init();
    let result = engine.run(&mut terminal, EventStream::new()).await;
    ratatui::restore();
    result
}

fn format_words(catalog: &WordCatalog, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(catalog.words())?)
    } else {
        Ok(catalog.words().join("\n"))
    }
}
