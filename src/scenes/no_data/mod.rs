// src/scenes/no_data/mod.rs

use std::io::{self, Write};

use crate::config::Config;

/// Draws the screen shown when the deck had no valid cards at startup.
/// Unlike an empty category, this cannot be fixed from inside the app.
pub fn draw_no_data_scene<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(out, "== {} ==", config.window_title)?;
    writeln!(out)?;
    writeln!(out, "No Flashcards Available")?;
    writeln!(out, "Get started by adding your first flashcard to a deck file.")?;
    writeln!(out)?;
    writeln!(out, "How to add flashcards:")?;
    writeln!(out, "  1. Create a JSON file holding an array of cards")?;
    writeln!(out, "  2. Give each card an `id`, `category`, `prompt` and `response`")?;
    writeln!(out, "  3. Run: flashdeck path/to/deck.json")?;
    if let Some(path) = &config.deck_path {
        writeln!(out)?;
        writeln!(out, "No valid cards were found in {}.", path.display())?;
    }
    Ok(())
}
