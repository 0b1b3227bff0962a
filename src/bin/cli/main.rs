use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use flashmind::analytics::{compute_usage_stats, UsageStats};
use flashmind::decks::{DeckStore, FlashcardSet};
use flashmind::extraction::{GeminiClient, GeminiConfig};
use flashmind::sessions::SessionLedger;
use flashmind::storage::{FileStore, KeyValueStore};

#[derive(Parser)]
#[command(name = "flashmind-cli", about = "FlashMind deck and study tracker", version)]
struct Cli {
    /// Data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a deck of flashcards from a PDF document
    Generate {
        /// Path to the PDF
        pdf: PathBuf,
        /// Deck name (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
        /// Gemini model override
        #[arg(long)]
        model: Option<String>,
    },

    /// List decks, newest first
    Decks,

    /// Delete a deck
    Delete {
        /// Deck id
        id: Uuid,
    },

    /// Record a completed study session
    Study {
        /// Deck id
        id: Uuid,
        /// Number of cards studied
        #[arg(long)]
        cards: u32,
        /// Session duration in seconds
        #[arg(long)]
        seconds: u32,
        /// Correct answers, if tracked
        #[arg(long)]
        correct: Option<u32>,
    },

    /// Show the usage report
    Stats,
}

fn open_store(data_dir: Option<PathBuf>) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => FileStore::default_data_dir()?,
    };
    Ok(Arc::new(FileStore::new(dir)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = open_store(cli.data_dir.clone())?;

    match cli.command {
        Command::Generate { pdf, name, model } => {
            let api_key =
                std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;

            let file_name = pdf
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document.pdf".to_string());
            let data = std::fs::read(&pdf)
                .with_context(|| format!("Failed to read {}", pdf.display()))?;

            let mut config = GeminiConfig::new(api_key);
            if let Some(model) = model {
                config = config.with_model(model);
            }

            let client = GeminiClient::new(config)?;
            let cards = client.generate_flashcards(&data, &file_name).await?;
            if cards.is_empty() {
                bail!("No flashcards could be extracted from {}", file_name);
            }

            let deck_name =
                name.unwrap_or_else(|| file_name.trim_end_matches(".pdf").to_string());
            let deck = FlashcardSet::new(deck_name, cards);

            let mut decks = DeckStore::new(store);
            decks.add_deck(deck.clone())?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&deck)?),
                OutputFormat::Plain => println!(
                    "Created deck '{}' with {} cards (id {})",
                    deck.name,
                    deck.card_count(),
                    deck.id
                ),
            }
        }

        Command::Decks => {
            let decks = DeckStore::new(store);
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(decks.decks())?)
                }
                OutputFormat::Plain => {
                    if decks.decks().is_empty() {
                        println!("No decks yet. Use `generate` to create one from a PDF.");
                    }
                    for deck in decks.decks() {
                        println!(
                            "{}  {:<32} {:>3} cards  {}",
                            deck.id,
                            deck.name,
                            deck.card_count(),
                            deck.created_at
                                .with_timezone(&Local)
                                .format("%Y-%m-%d %H:%M")
                        );
                    }
                }
            }
        }

        Command::Delete { id } => {
            let mut decks = DeckStore::new(store);
            decks.delete_deck(id)?;
            println!("Deleted deck {}", id);
        }

        Command::Study { id, cards, seconds, correct } => {
            let mut ledger = SessionLedger::new(store);
            let session = ledger.record_session(id, Utc::now(), cards, seconds, correct)?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session)?),
                OutputFormat::Plain => println!(
                    "Recorded session {} ({} cards in {}s)",
                    session.id, session.cards_studied, session.duration
                ),
            }
        }

        Command::Stats => {
            let decks = DeckStore::new(Arc::clone(&store));
            let ledger = SessionLedger::new(store);
            let stats =
                compute_usage_stats(decks.decks(), ledger.sessions(), Local::now().date_naive());
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Plain => print_stats(&stats),
            }
        }
    }

    Ok(())
}

fn print_stats(stats: &UsageStats) {
    println!(
        "Decks: {}   Cards: {}   Sessions: {}   Total time: {} min",
        stats.total_sets, stats.total_cards, stats.total_study_sessions, stats.total_time_spent
    );
    println!();
    println!("Last 7 days:");
    for day in &stats.weekly_progress {
        println!(
            "  {:<4} {:>4} cards  {:>4} min  {:>2} sessions",
            day.date, day.cards_studied, day.time_spent, day.sessions
        );
    }
    println!();
    println!("Cards studied today: {}", stats.cards_studied_today);
}
