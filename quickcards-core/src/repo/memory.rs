use crate::{CardStore, CoreError, Flashcard};
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    cards: Vec<Flashcard>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardStore for MemoryStore {
    fn add(&mut self, term: &str, definition: &str) -> Result<usize, CoreError> {
        if term.trim().is_empty() || definition.trim().is_empty() {
            return Err(CoreError::Validation("both fields required"));
        }
        self.cards.push(Flashcard::new(term, definition));
        debug!(term, total = self.cards.len(), "card stored");
        Ok(self.cards.len())
    }

    fn remove(&mut self, term: &str) -> Result<Flashcard, CoreError> {
        if term.is_empty() {
            return Err(CoreError::Validation("term required"));
        }
        let Some(idx) = self.cards.iter().position(|c| c.term == term) else {
            return Err(CoreError::NotFound(term.to_string()));
        };
        let card = self.cards.remove(idx);
        debug!(term, total = self.cards.len(), "card dropped");
        Ok(card)
    }

    fn list(&self) -> &[Flashcard] {
        &self.cards
    }
}
