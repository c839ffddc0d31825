/// Ordered list of committed sign tokens, plus the history of cleared
/// sentences.
///
/// Two identical adjacent tokens are never stored; non-adjacent duplicates
/// are fine. History is append-only, oldest first.
#[derive(Debug, Clone, Default)]
pub struct SentenceBuffer {
    tokens: Vec<String>,
    history: Vec<String>,
}

impl SentenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` unless it repeats the current last token. Returns
    /// whether the sentence changed.
    pub fn append(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if self.tokens.last() == Some(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn remove_last(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    /// Archives the current sentence into history and empties it. Clearing
    /// an empty sentence records nothing.
    pub fn clear(&mut self) {
        if self.tokens.is_empty() {
            return;
        }
        self.history.push(self.as_text());
        self.tokens.clear();
    }

    pub fn as_text(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent `count` history entries, oldest first.
    pub fn recent_history(&self, count: usize) -> &[String] {
        &self.history[self.history.len().saturating_sub(count)..]
    }
}
