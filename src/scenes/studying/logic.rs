// src/scenes/studying/logic.rs

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::controller::Progress;

/// Wraps text into lines no wider than `max_width` display columns.
/// Embedded newlines start a new line; words wider than a line are split.
pub fn layout_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            for piece in split_long_word(word, max_width) {
                let piece_width = piece.width();
                if line_width > 0 && line_width + 1 + piece_width > max_width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                if line_width > 0 {
                    line.push(' ');
                    line_width += 1;
                }
                line.push_str(&piece);
                line_width += piece_width;
            }
        }
        lines.push(line);
    }
    lines
}

fn split_long_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// A fixed-width text progress bar, e.g. `[#####-----]`.
pub fn progress_bar(progress: Progress, width: usize) -> String {
    let filled = if progress.total == 0 {
        0
    } else {
        progress.index * width / progress.total
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
