use crate::{CoreError, Flashcard};

pub mod memory;

pub use memory::MemoryStore;

/// Ordered card collection driven by the session controller.
///
/// Duplicate terms are allowed; `remove` only ever takes the first match.
pub trait CardStore {
    /// Appends a card and returns the new total.
    fn add(&mut self, term: &str, definition: &str) -> Result<usize, CoreError>;
    fn remove(&mut self, term: &str) -> Result<Flashcard, CoreError>;
    fn list(&self) -> &[Flashcard];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
