// FlashDeck - main.rs

use std::env;
use std::io::{self, BufRead, Write};

use flashdeck::config::Config;
use flashdeck::deck::loader::{load_deck, DeckSource};
use flashdeck::scenes::no_data::draw_no_data_scene;
use flashdeck::scenes::studying::draw_studying_scene;
use flashdeck::scenes::studying::input::handle_studying_input;
use flashdeck::state::{map_to_study_input, AppState, Scene};
use flashdeck::DeckController;

pub fn main() -> Result<(), String> {
    env_logger::init();

    // --- Get the deck path from command-line arguments, if any ---
    let config = Config::new().with_args(env::args());
    let source = match &config.deck_path {
        Some(path) => DeckSource::File(path.clone()),
        None => DeckSource::Bundled,
    };

    let report = load_deck(&source).map_err(|e| format!("Failed to load deck: {}", e))?;
    let mut state = AppState::new(DeckController::new(report.cards), config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if state.scene == Scene::NoData {
        draw_no_data_scene(&mut out, &state.config).map_err(|e| e.to_string())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // --- Main Application Loop ---
    'running: while state.running {
        draw_studying_scene(&mut out, &state.deck.snapshot(), &state.config, state.show_help)
            .map_err(|e| e.to_string())?;
        write!(out, "> ").and_then(|_| out.flush()).map_err(|e| e.to_string())?;

        let line = match lines.next() {
            Some(line) => line.map_err(|e| e.to_string())?,
            None => break 'running, // stdin closed
        };

        match map_to_study_input(&line, &state.deck.categories()) {
            Some(input) => handle_studying_input(&mut state, input, &mut out)?,
            None => {
                writeln!(out, "Unknown command {:?}. Type ? for help.", line.trim()).map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}
