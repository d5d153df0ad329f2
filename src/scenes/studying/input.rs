// src/scenes/studying/input.rs

use std::io::Write;

use crate::state::{AppState, Scene, StudyInput};

/// Handles one trigger for the studying scene.
pub fn handle_studying_input<W: Write>(
    state: &mut AppState,
    input: StudyInput,
    out: &mut W,
) -> Result<(), String> {
    if state.scene != Scene::Studying {
        return Ok(());
    }
    log::debug!("Study input: {:?}", input);
    state.show_help = false;

    match input {
        StudyInput::Next => state.deck.advance(),
        StudyInput::Previous => state.deck.retreat(),
        StudyInput::Flip => state.deck.flip(),
        StudyInput::Shuffle => state.deck.shuffle(),
        StudyInput::ToggleRevealAll => state.deck.toggle_reveal_all(),
        StudyInput::SetCategory(filter) => state.deck.set_category(filter),
        StudyInput::Dump => {
            let json = serde_json::to_string_pretty(&state.deck.snapshot()).map_err(|e| e.to_string())?;
            writeln!(out, "{}", json).map_err(|e| e.to_string())?;
        }
        StudyInput::Help => state.show_help = true,
        StudyInput::Quit => state.running = false,
    }
    Ok(())
}
