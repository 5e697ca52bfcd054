//! Play riddle rounds on stdin/stdout.
//!
//! Usage: `riddle-repl <cards.json> [config.json]`
//!
//! Each input line is handled as a chat message from a single player.
//! Logs go to stderr and follow `RUST_LOG` (default `info`).

use std::io::{self, BufRead, Write};

use riddle_cards::{CardCatalog, Game, GameConfig, MemoryCatalogSource, MemorySessionStore, UserId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PLAYER: UserId = UserId::new(1);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let cards_path = args.next().ok_or("usage: riddle-repl <cards.json> [config.json]")?;
    let config = match args.next() {
        Some(path) => GameConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    let catalog = CardCatalog::from_json_str(&std::fs::read_to_string(&cards_path)?)?;
    tracing::info!(path = %cards_path, cards = catalog.len(), "catalog loaded");

    let game = Game::new(&config, MemoryCatalogSource::new(catalog), MemorySessionStore::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        for reply in game.handle(PLAYER, &line?)? {
            writeln!(out, "{}", reply)?;
            let buttons = reply.buttons();
            if !buttons.is_empty() {
                writeln!(out, "[{}]", buttons.join("] ["))?;
            }
        }
    }

    Ok(())
}
