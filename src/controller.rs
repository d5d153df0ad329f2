// src/controller.rs
// Navigation, filtering, shuffling and reveal state over a validated card sequence.

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use serde::Serialize;

#[cfg(debug_assertions)]
use crate::debug::Tracer;
use crate::deck::{Card, CategoryFilter};

/// What the study view is currently able to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckStatus {
    /// No card survived validation. Changing the filter cannot fix this.
    NoData,
    /// The active filter matches no card.
    Empty,
    FaceDown,
    FaceUp,
}

/// One-based position and view size, `0/0` when nothing is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
}

/// Everything a renderer needs after an operation returns.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub status: DeckStatus,
    pub card: Option<&'a Card>,
    pub progress: Progress,
    pub filter: &'a CategoryFilter,
    pub categories: Vec<CategoryFilter>,
    pub face_up: bool,
    pub can_retreat: bool,
    pub can_advance: bool,
}

/// Owns the deck state. All mutation goes through its operations, none of which fail:
/// requests that make no sense in the current state are no-ops.
pub struct DeckController {
    working: Vec<Card>,
    categories: Vec<String>, // Distinct, in first-seen order of the validated input
    filter: CategoryFilter,
    view: Vec<usize>, // Indices into `working`, rebuilt by `refresh_view`
    position: usize,
    revealed: bool,
    reveal_all: bool,
}

impl DeckController {
    pub fn new(cards: Vec<Card>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for card in &cards {
            if !categories.contains(&card.category) {
                categories.push(card.category.clone());
            }
        }

        let mut deck = DeckController {
            working: cards,
            categories,
            filter: CategoryFilter::All,
            view: Vec::new(),
            position: 0,
            revealed: false,
            reveal_all: false,
        };
        deck.refresh_view();

        if deck.has_data() {
            log::debug!(
                "Deck ready with {} cards in {} categories",
                deck.working.len(),
                deck.categories.len()
            );
        } else {
            log::error!("No flashcards available: the deck has no valid cards.");
        }
        deck
    }

    /// Recomputes the filtered view and starts it from the first card, face down.
    fn refresh_view(&mut self) {
        self.view = self
            .working
            .iter()
            .enumerate()
            .filter(|(_, card)| self.filter.matches(card))
            .map(|(i, _)| i)
            .collect();
        self.position = 0;
        self.revealed = false;
    }

    pub fn has_data(&self) -> bool {
        !self.working.is_empty()
    }

    pub fn status(&self) -> DeckStatus {
        if !self.has_data() {
            DeckStatus::NoData
        } else if self.view.is_empty() {
            DeckStatus::Empty
        } else if self.is_face_up() {
            DeckStatus::FaceUp
        } else {
            DeckStatus::FaceDown
        }
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        log::debug!("Category filter set to {:?}", filter);
        self.filter = filter;
        self.refresh_view();
    }

    /// Moves to the next card. Does not wrap at the end.
    pub fn advance(&mut self) {
        if self.can_advance() {
            self.position += 1;
            self.revealed = false;
        }
    }

    pub fn retreat(&mut self) {
        if self.can_retreat() {
            self.position -= 1;
            self.revealed = false;
        }
    }

    pub fn flip(&mut self) {
        if !self.view.is_empty() {
            self.revealed = !self.revealed;
        }
    }

    pub fn toggle_reveal_all(&mut self) {
        self.reveal_all = !self.reveal_all;
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut thread_rng());
    }

    /// Permutes the cards of the filtered view uniformly at random. The permuted cards
    /// go back into the slots they held in the working sequence, so cards hidden by
    /// the filter keep their places.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.view.is_empty() {
            return;
        }
        #[cfg(debug_assertions)]
        let _tracer = Tracer::new("Shuffle");

        let mut picked: Vec<Card> = self.view.iter().map(|&i| self.working[i].clone()).collect();
        picked.shuffle(rng);
        for (&slot, card) in self.view.iter().zip(picked) {
            self.working[slot] = card;
        }
        self.refresh_view();
        log::debug!("Shuffled {} cards", self.view.len());
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.view.get(self.position).map(|&i| &self.working[i])
    }

    pub fn progress(&self) -> Progress {
        if self.view.is_empty() {
            Progress { index: 0, total: 0 }
        } else {
            Progress { index: self.position + 1, total: self.view.len() }
        }
    }

    /// The sentinel followed by every category of the validated deck.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().cloned().map(CategoryFilter::Only))
            .collect()
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn filtered_view(&self) -> impl Iterator<Item = &Card> + '_ {
        self.view.iter().map(|&i| &self.working[i])
    }

    pub fn working_sequence(&self) -> &[Card] {
        &self.working
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_reveal_all(&self) -> bool {
        self.reveal_all
    }

    pub fn is_face_up(&self) -> bool {
        !self.view.is_empty() && (self.revealed || self.reveal_all)
    }

    pub fn can_advance(&self) -> bool {
        self.position + 1 < self.view.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.position > 0
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            status: self.status(),
            card: self.current_card(),
            progress: self.progress(),
            filter: &self.filter,
            categories: self.categories(),
            face_up: self.is_face_up(),
            can_retreat: self.can_retreat(),
            can_advance: self.can_advance(),
        }
    }
}
