// src/deck/mod.rs
// This module holds the card model, the record validator and the deck loader.

pub mod loader;
pub mod validator;

use serde::Serialize;

/// Represents a single study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: u64,          // Unique across the deck, never displayed
    pub category: String, // Grouping label used by the filter
    pub prompt: String,   // Front face
    pub response: String, // Back face
}

/// Which cards the study view shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// The sentinel: no restriction.
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => card.category == *category,
        }
    }

    /// The text shown for this filter, using `all_label` for the sentinel.
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            CategoryFilter::All => all_label,
            CategoryFilter::Only(category) => category,
        }
    }
}
