// src/scenes/studying/mod.rs

use std::io::{self, Write};

use crate::config::Config;
use crate::controller::{DeckStatus, Snapshot};

pub mod input;
pub mod logic;

use logic::{layout_text, progress_bar};

const KEY_HINT: &str = "Keys: n/p navigate | Enter flip | s shuffle | a show/hide all | c <n> category | ? help | q quit";

/// Draws the studying scene from a snapshot of the deck.
pub fn draw_studying_scene<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    config: &Config,
    show_help: bool,
) -> io::Result<()> {
    let margin = "  ";
    let category_label = snapshot.filter.label(config.all_label);

    writeln!(out)?;
    writeln!(out, "== {} ==", config.window_title)?;
    writeln!(
        out,
        "Card {}/{} in {}",
        snapshot.progress.index, snapshot.progress.total, category_label
    )?;
    writeln!(out)?;

    match (snapshot.status, snapshot.card) {
        (DeckStatus::FaceDown | DeckStatus::FaceUp, Some(card)) => {
            writeln!(out, "{}[{}]", margin, card.category)?;
            writeln!(out)?;
            for line in layout_text(&card.prompt, config.wrap_width) {
                writeln!(out, "{}{}", margin, line)?;
            }
            writeln!(out)?;
            if snapshot.face_up {
                writeln!(out, "{}--- answer ---", margin)?;
                for line in layout_text(&card.response, config.wrap_width) {
                    writeln!(out, "{}{}", margin, line)?;
                }
            } else {
                writeln!(out, "{}(press Enter to flip)", margin)?;
            }
        }
        _ => {
            writeln!(out, "{}No cards in category '{}'.", margin, category_label)?;
            writeln!(out, "{}Use `c` to pick another category.", margin)?;
        }
    }

    writeln!(out)?;
    let previous = if snapshot.can_retreat { "< prev" } else { "      " };
    let next = if snapshot.can_advance { "next >" } else { "      " };
    writeln!(out, "{} | {}", previous, next)?;
    writeln!(out, "{}", progress_bar(snapshot.progress, config.progress_bar_width))?;

    if show_help {
        writeln!(out, "Categories:")?;
        for (i, category) in snapshot.categories.iter().enumerate() {
            let marker = if category == snapshot.filter { "*" } else { " " };
            writeln!(out, " {}{}: {}", marker, i, category.label(config.all_label))?;
        }
    }
    writeln!(out, "{}", KEY_HINT)?;
    Ok(())
}
