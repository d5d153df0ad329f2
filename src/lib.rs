// FlashDeck - lib.rs
// The deck validator and controller, plus the terminal scenes that render them.

pub mod config;
pub mod controller;
pub mod debug;
pub mod deck;
pub mod scenes;
pub mod state;

pub use controller::{DeckController, DeckStatus, Progress, Snapshot};
pub use deck::{Card, CategoryFilter};
