//! Car-Tegories - Entry Point
//!
//! Interactive command-line driver for the game core. It loads the deck
//! catalog (remote endpoint or bundled TOML files), restores the saved
//! deck preferences, and runs guessing rounds from stdin commands.

use cartegories::core::error::Result;
use cartegories::core::types::{Card, DeckId};
use cartegories::core::GameConfig;
use cartegories::game::GameSession;
use cartegories::remote::bundled::BundledProvider;
use cartegories::remote::http::HttpContentProvider;
use cartegories::storage::FileStore;

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "cartegories", about = "Party guessing game: decks, timer, draws")]
struct Args {
    /// Remote content base URL; bundled decks are used when unset
    #[arg(long)]
    base_url: Option<String>,

    /// Directory holding the bundled deck TOML files
    #[arg(long, default_value = "decks")]
    decks_dir: PathBuf,

    /// Directory for persisted preferences
    #[arg(long, default_value = ".cartegories")]
    store_dir: PathBuf,

    /// Seed the draw RNG for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("cartegories=info")
        .init();

    tracing::info!("Car-Tegories starting...");

    // Create the async runtime for the one-shot catalog fetch
    let rt = Runtime::new()?;

    let config = GameConfig::default();
    let store = Box::new(FileStore::new(&args.store_dir));

    let mut session = match &args.base_url {
        Some(url) => {
            let provider = HttpContentProvider::new(url.clone());
            rt.block_on(GameSession::load(&provider, store, config))?
        }
        None => {
            let provider = BundledProvider::new(&args.decks_dir);
            rt.block_on(GameSession::load(&provider, store, config))?
        }
    };

    if let Some(seed) = args.seed {
        session.reseed(seed);
    }

    // Display welcome message
    println!("\n=== CAR-TEGORIES ===");
    println!("Draw prompt cards from your active decks and guess before time runs out");
    println!();
    println!("Commands:");
    println!("  new             - Start a new round and draw the first card");
    println!("  draw / d        - Draw the next card");
    println!("  nailed / n      - Score the current card and draw the next");
    println!("  missed / m      - Skip the current card and draw the next");
    println!("  decks           - List decks and which are active");
    println!("  use <id> ...    - Set the active decks");
    println!("  timer <secs>    - Set the round timer");
    println!("  tick            - Count the timer down one second");
    println!("  status / s      - Show score and round progress");
    println!("  quit / q        - Exit the game");
    println!();

    let mut current: Option<Card> = None;

    // Main game loop
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "new" {
            session.start_new_round();
            println!(
                "New round! {} seconds on the clock.",
                session.game().time_remaining
            );
            current = draw_and_show(&mut session);
            continue;
        }

        if input == "draw" || input == "d" {
            current = draw_and_show(&mut session);
            continue;
        }

        if input == "nailed" || input == "n" {
            match current.take() {
                Some(card) => {
                    session.mark_nailed(card.prompt);
                    println!("Nailed it! Score: {}", session.game().score);
                    current = draw_and_show(&mut session);
                }
                None => println!("No card in play - try 'draw'"),
            }
            continue;
        }

        if input == "missed" || input == "m" {
            match current.take() {
                Some(card) => {
                    session.mark_missed(card.prompt);
                    current = draw_and_show(&mut session);
                }
                None => println!("No card in play - try 'draw'"),
            }
            continue;
        }

        if input == "decks" {
            display_decks(&session);
            continue;
        }

        if let Some(rest) = input.strip_prefix("use ") {
            let ids: Vec<DeckId> = rest.split_whitespace().map(DeckId::from).collect();
            if ids.is_empty() {
                println!("Usage: use <deck-id> [<deck-id> ...]");
                continue;
            }
            if let Err(e) = session.set_active_decks(ids) {
                tracing::warn!("Deck preference was not saved: {}", e);
                println!("Decks set, but the preference will not survive a restart.");
            } else {
                println!("Active decks updated ({} playable cards).",
                    session.playable_cards().len());
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("timer ") {
            match rest.trim().parse::<u32>() {
                Ok(secs) => {
                    session.set_timer_seconds(secs);
                    println!("Timer set to {} seconds.", secs);
                }
                Err(_) => println!("Usage: timer <seconds>"),
            }
            continue;
        }

        if input == "tick" {
            let remaining = session.tick_timer();
            if remaining == 0 {
                println!("Time's up! Final score: {}", session.game().score);
            } else {
                println!("{} seconds left.", remaining);
            }
            continue;
        }

        if input == "status" || input == "s" {
            display_status(&session);
            continue;
        }

        println!("Unknown command: {}", input);
    }

    tracing::info!("Car-Tegories shutting down");
    Ok(())
}

/// Draw the next card and print it, or announce the end of the round
fn draw_and_show(session: &mut GameSession) -> Option<Card> {
    match session.draw_card() {
        Some(card) => {
            println!(
                "Card #{} [{}]: {}",
                session.game().card_index,
                card.deck_id,
                card.prompt
            );
            Some(card)
        }
        None => {
            println!(
                "No more cards - round over! Final score: {}",
                session.game().score
            );
            None
        }
    }
}

fn display_decks(session: &GameSession) {
    println!("Decks:");
    for deck in session.catalog().decks() {
        let active = session.game().active_decks.contains(&deck.id);
        let marker = if active { "x" } else { " " };
        let tag = if deck.for_sale { " (for sale)" } else { "" };
        println!(
            "  [{}] {:<20} {} cards{}",
            marker,
            deck.id,
            deck.cards.len(),
            tag
        );
    }
}

fn display_status(session: &GameSession) {
    let game = session.game();
    println!(
        "Score: {} | Drawn: {} of {} | Time: {}s",
        game.score,
        game.card_index,
        session.playable_cards().len(),
        game.time_remaining
    );
    let active: Vec<&str> = game.active_decks.iter().map(|d| d.as_str()).collect();
    println!("Active decks: {}", active.join(", "));
    if !game.nailed_items.is_empty() {
        println!("Nailed: {}", game.nailed_items.join(", "));
    }
    if !game.missed_items.is_empty() {
        println!("Missed: {}", game.missed_items.join(", "));
    }
}
