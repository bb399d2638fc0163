use clap::Parser;
use lectern::core::catalog;
use lectern::core::config::{self, LecternConfig, ResolvedConfig};
use lectern::core::deck::{Deck, DeckError};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lectern", about = "Terminal slide deck viewer")]
struct Args {
    /// Deck file to open (JSON, or TOML by extension). Defaults to the built-in deck.
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// 1-based slide to open on
    #[arg(short, long)]
    start: Option<usize>,

    /// Validate the deck, print an outline and exit
    #[arg(long)]
    check: bool,
}

fn load_deck(config: &ResolvedConfig) -> Result<Deck, DeckError> {
    match &config.deck_path {
        Some(path) => Deck::load(path),
        None => catalog::builtin(),
    }
}

fn print_outline(deck: &Deck) {
    println!("{}", deck.title().unwrap_or("Untitled deck"));
    for (index, slide) in deck.slides().iter().enumerate() {
        println!(
            "{:>3}. {} [{}]",
            index + 1,
            slide.title,
            slide.content.kind()
        );
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lectern.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("lectern.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("Warning: {e}; using defaults");
        LecternConfig::default()
    });
    let config = config::resolve(&file_config, args.deck.as_deref(), args.start);

    let deck = load_deck(&config).map_err(|e| {
        log::error!("Failed to load deck: {}", e);
        std::io::Error::other(format!("failed to load deck: {e}"))
    })?;

    log::info!(
        "Lectern starting up with {} slides from {}",
        deck.len(),
        config
            .deck_path
            .as_ref()
            .map_or_else(|| "the built-in deck".to_string(), |p| p.display().to_string())
    );

    if args.check {
        print_outline(&deck);
        return Ok(());
    }

    lectern::tui::run(config, deck)
}
