use std::path::PathBuf;

pub struct Config {
    pub window_title: &'static str,
    pub all_label: &'static str,
    pub wrap_width: usize,
    pub progress_bar_width: usize,
    pub swipe_threshold: f32,
    pub deck_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            window_title: "FlashDeck v0.1",
            all_label: "All",
            wrap_width: 60,
            progress_bar_width: 30,
            swipe_threshold: 50.0,
            deck_path: None,
        }
    }

    /// Uses the first command-line argument, if any, as the deck path.
    pub fn with_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Self {
        self.deck_path = args.into_iter().nth(1).map(PathBuf::from);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
