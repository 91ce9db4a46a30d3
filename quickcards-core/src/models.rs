use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_MORE_CARDS: &str = "No more flashcards available.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.term, self.definition)
    }
}

/// Renders the live card list the way the main screen shows it,
/// e.g. `Cards: hola: hello, adios: goodbye`.
pub fn card_list_line(cards: &[Flashcard]) -> String {
    let joined = cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Cards: {joined}")
}
