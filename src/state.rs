// src/state.rs

use crate::config::Config;
use crate::controller::DeckController;
use crate::deck::CategoryFilter;

/// Represents the current screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// The deck had no valid cards at startup. Nothing can be studied.
    NoData,
    Studying,
}

/// The top-level state for the entire application.
pub struct AppState {
    pub scene: Scene,
    pub deck: DeckController,
    pub config: Config,
    pub show_help: bool,
    pub running: bool,
}

impl AppState {
    pub fn new(deck: DeckController, config: Config) -> Self {
        let scene = if deck.has_data() { Scene::Studying } else { Scene::NoData };
        Self {
            scene,
            deck,
            config,
            show_help: false,
            running: scene == Scene::Studying,
        }
    }
}

/// A unified, high-level trigger that the study scene actually handles.
/// Every deck variant maps onto one deck controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyInput {
    Next,
    Previous,
    Flip,
    Shuffle,
    ToggleRevealAll,
    SetCategory(CategoryFilter),
    Dump,
    Help,
    Quit,
}

/// A horizontal touch gesture, in screen coordinates. Zero means the
/// coordinate was never recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub start_x: f32,
    pub end_x: f32,
}

/// Maps one line of keyboard input to a trigger. `categories` are the filter
/// options in display order, so `c 2` picks the third option.
pub fn map_to_study_input(line: &str, categories: &[CategoryFilter]) -> Option<StudyInput> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    let input = match command.to_ascii_lowercase().as_str() {
        // A bare Enter flips, like Space/Enter on the card.
        "" | "f" | "flip" | "space" | "enter" => StudyInput::Flip,
        "n" | "next" | "right" => StudyInput::Next,
        "p" | "prev" | "previous" | "left" => StudyInput::Previous,
        "s" | "shuffle" => StudyInput::Shuffle,
        "a" => StudyInput::ToggleRevealAll,
        "c" | "category" => StudyInput::SetCategory(parse_category(argument, categories)?),
        "j" | "json" => StudyInput::Dump,
        "?" | "h" | "help" => StudyInput::Help,
        "q" | "quit" => StudyInput::Quit,
        _ => return None,
    };
    Some(input)
}

fn parse_category(argument: &str, categories: &[CategoryFilter]) -> Option<CategoryFilter> {
    if argument.is_empty() {
        return Some(CategoryFilter::All);
    }
    match argument.parse::<usize>() {
        Ok(index) => categories.get(index).cloned(),
        Err(_) => Some(CategoryFilter::Only(argument.to_string())),
    }
}

/// Swiping left moves forward, swiping right moves back.
pub fn map_swipe(swipe: Swipe, threshold: f32) -> Option<StudyInput> {
    if swipe.start_x == 0.0 || swipe.end_x == 0.0 {
        return None;
    }
    let distance = swipe.start_x - swipe.end_x;
    if distance > threshold {
        Some(StudyInput::Next)
    } else if distance < -threshold {
        Some(StudyInput::Previous)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Card;

    fn options() -> Vec<CategoryFilter> {
        vec![
            CategoryFilter::All,
            CategoryFilter::Only("Verbs".into()),
            CategoryFilter::Only("Nouns".into()),
        ]
    }

    #[test]
    fn test_keyboard_mapping() {
        let categories = options();
        let cases = [
            ("n", StudyInput::Next),
            ("RIGHT", StudyInput::Next),
            ("p", StudyInput::Previous),
            ("left", StudyInput::Previous),
            ("", StudyInput::Flip),
            ("  ", StudyInput::Flip),
            ("f", StudyInput::Flip),
            ("s", StudyInput::Shuffle),
            ("a", StudyInput::ToggleRevealAll),
            ("j", StudyInput::Dump),
            ("?", StudyInput::Help),
            ("q", StudyInput::Quit),
        ];
        for (line, expected) in cases {
            assert_eq!(map_to_study_input(line, &categories), Some(expected), "line: {:?}", line);
        }
        assert_eq!(map_to_study_input("xyzzy", &categories), None);
    }

    #[test]
    fn test_category_mapping() {
        let categories = options();
        assert_eq!(
            map_to_study_input("c", &categories),
            Some(StudyInput::SetCategory(CategoryFilter::All))
        );
        assert_eq!(
            map_to_study_input("c 2", &categories),
            Some(StudyInput::SetCategory(CategoryFilter::Only("Nouns".into())))
        );
        assert_eq!(
            map_to_study_input("category Level 1 - Recall", &categories),
            Some(StudyInput::SetCategory(CategoryFilter::Only("Level 1 - Recall".into())))
        );
        assert_eq!(map_to_study_input("c 9", &categories), None);
    }

    #[test]
    fn test_swipe_mapping() {
        let swipe = |start_x, end_x| map_swipe(Swipe { start_x, end_x }, 50.0);
        assert_eq!(swipe(300.0, 200.0), Some(StudyInput::Next));
        assert_eq!(swipe(200.0, 300.0), Some(StudyInput::Previous));
        assert_eq!(swipe(200.0, 240.0), None);
        assert_eq!(swipe(250.0, 200.0), None);
        assert_eq!(swipe(0.0, 300.0), None);
        assert_eq!(swipe(300.0, 0.0), None);
    }

    #[test]
    fn test_app_state_scene() {
        let empty = AppState::new(DeckController::new(Vec::new()), Config::new());
        assert_eq!(empty.scene, Scene::NoData);
        assert!(!empty.running);

        let card = Card { id: 1, category: "A".into(), prompt: "Q".into(), response: "R".into() };
        let state = AppState::new(DeckController::new(vec![card]), Config::new());
        assert_eq!(state.scene, Scene::Studying);
        assert!(state.running);
    }
}
