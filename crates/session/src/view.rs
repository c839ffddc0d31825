//! Overlay text for a display layer.
//!
//! Pure formatting over a [`FrameUpdate`] and the sentence history; the
//! actual drawing belongs to the host.

use crate::session::FrameUpdate;

/// How many cleared sentences the overlay shows.
const HISTORY_LINES: usize = 3;

/// Builds the overlay lines for one frame: the live candidate with its
/// confidence, the sentence so far, and the most recent history entries.
/// Empty parts produce no line.
pub fn overlay_lines(update: &FrameUpdate, history: &[String]) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(sign) = &update.sign {
        lines.push(format!("Sign: {} ({:.2})", sign, update.confidence));
    }

    if !update.sentence.is_empty() {
        lines.push(format!("Sentence: {}", update.sentence));
    }

    if !history.is_empty() {
        let recent = &history[history.len().saturating_sub(HISTORY_LINES)..];
        lines.push(format!("History: {}", recent.join(" | ")));
    }

    lines
}

/// Wraps text into lines shorter than `max_chars`, breaking on words. Words
/// longer than the limit get a line of their own.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.len()
        } else {
            current.len() + 1 + word.len()
        };

        if candidate_len < max_chars || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
