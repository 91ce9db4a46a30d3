use crate::{card_list_line, CardStore, CoreError, Flashcard, MemoryStore};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

pub const STATUS_INITIAL: &str = "No Cards Created.";
pub const STATUS_ENTER_CARD: &str = "Enter the Term and Definition";
pub const STATUS_ENTER_REMOVAL: &str = "Enter the Term to Remove";
pub const STATUS_NO_CARDS: &str = "No cards available to test.";
pub const STATUS_ADD_INVALID: &str = "Please enter both term and value.";
pub const STATUS_REMOVE_INVALID: &str = "Please enter a term to remove.";
pub const STATUS_TEST_DONE: &str = "Test completed.";

/// One pass over a shuffled snapshot of the store.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TestRun {
    pub deck: Vec<Flashcard>,
    pub position: usize,
    pub answer_shown: bool,
}

impl TestRun {
    pub fn current(&self) -> Option<&Flashcard> {
        self.deck.get(self.position)
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 >= self.deck.len()
    }
}

/// Exclusive session mode. Form modes carry their pending input.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Idle,
    Adding {
        term: String,
        definition: String,
    },
    Removing {
        term: String,
    },
    Testing(TestRun),
}

impl Mode {
    fn adding() -> Self {
        Mode::Adding {
            term: String::new(),
            definition: String::new(),
        }
    }

    fn removing() -> Self {
        Mode::Removing { term: String::new() }
    }

    pub fn is_testing(&self) -> bool {
        matches!(self, Mode::Testing(_))
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SessionState {
    pub mode: Mode,
    pub status: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: Mode::Idle,
            status: STATUS_INITIAL.to_string(),
        }
    }
}

/// User intents a rendering layer can dispatch through [`SessionController::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    ToggleAdd,
    ToggleRemove,
    EditTerm(String),
    EditDefinition(String),
    SubmitAdd { term: String, definition: String },
    SubmitRemove { term: String },
    /// Submits whichever form is open, using its pending fields.
    SubmitPending,
    StartTest,
    ShowAnswer,
    NextCard,
}

pub struct SessionController<S = MemoryStore> {
    store: S,
    state: SessionState,
    rng: StdRng,
}

impl SessionController<MemoryStore> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new(), StdRng::from_entropy())
    }

    /// Deterministic deck order, for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_store(MemoryStore::new(), StdRng::seed_from_u64(seed))
    }
}

impl Default for SessionController<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CardStore> SessionController<S> {
    pub fn with_store(store: S, rng: StdRng) -> Self {
        Self {
            store,
            state: SessionState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    pub fn status(&self) -> &str {
        &self.state.status
    }

    pub fn cards(&self) -> &[Flashcard] {
        self.store.list()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_testing(&self) -> bool {
        self.state.mode.is_testing()
    }

    /// The card under test, or `None` outside a test (or on an empty deck).
    pub fn current_card(&self) -> Option<&Flashcard> {
        match &self.state.mode {
            Mode::Testing(run) => run.current(),
            _ => None,
        }
    }

    /// The card list is hidden while a test is running.
    pub fn card_list(&self) -> Option<String> {
        (!self.is_testing()).then(|| card_list_line(self.store.list()))
    }

    pub fn apply(&mut self, intent: Intent) -> &SessionState {
        match intent {
            Intent::ToggleAdd => self.toggle_add(),
            Intent::ToggleRemove => self.toggle_remove(),
            Intent::EditTerm(t) => self.edit_term(t),
            Intent::EditDefinition(d) => self.edit_definition(d),
            Intent::SubmitAdd { term, definition } => self.submit_add(&term, &definition),
            Intent::SubmitRemove { term } => self.submit_remove(&term),
            Intent::SubmitPending => self.submit_pending(),
            Intent::StartTest => self.start_test(),
            Intent::ShowAnswer => self.show_answer(),
            Intent::NextCard => self.next_card(),
        }
    }

    pub fn toggle_add(&mut self) -> &SessionState {
        match self.state.mode {
            Mode::Testing(_) => {}
            Mode::Adding { .. } => self.enter(Mode::Idle, ""),
            Mode::Idle | Mode::Removing { .. } => self.enter(Mode::adding(), STATUS_ENTER_CARD),
        }
        &self.state
    }

    pub fn toggle_remove(&mut self) -> &SessionState {
        match self.state.mode {
            Mode::Testing(_) => {}
            Mode::Removing { .. } => self.enter(Mode::Idle, ""),
            Mode::Idle | Mode::Adding { .. } => {
                self.enter(Mode::removing(), STATUS_ENTER_REMOVAL)
            }
        }
        &self.state
    }

    pub fn edit_term(&mut self, text: impl Into<String>) -> &SessionState {
        match &mut self.state.mode {
            Mode::Adding { term, .. } | Mode::Removing { term } => *term = text.into(),
            _ => {}
        }
        &self.state
    }

    pub fn edit_definition(&mut self, text: impl Into<String>) -> &SessionState {
        if let Mode::Adding { definition, .. } = &mut self.state.mode {
            *definition = text.into();
        }
        &self.state
    }

    /// Adds from explicit fields. Accepted from Idle or either form; any open
    /// form is discarded and the session lands in Idle.
    pub fn submit_add(&mut self, term: &str, definition: &str) -> &SessionState {
        if self.is_testing() {
            return &self.state;
        }
        let status = match self.store.add(term, definition) {
            Ok(total) => {
                info!(term, total, "card added");
                format!("Card Added. Total Cards: {total}")
            }
            Err(e) => {
                debug!(error = %e, "add rejected");
                STATUS_ADD_INVALID.to_string()
            }
        };
        self.enter(Mode::Idle, status);
        &self.state
    }

    /// Counterpart of [`Self::submit_add`] for removal.
    pub fn submit_remove(&mut self, term: &str) -> &SessionState {
        if self.is_testing() {
            return &self.state;
        }
        let status = match self.store.remove(term) {
            Ok(_) => {
                info!(term, total = self.store.len(), "card removed");
                format!("Card with term '{term}' removed.")
            }
            Err(CoreError::NotFound(t)) => format!("No card found with term '{t}'."),
            Err(CoreError::Validation(_)) => STATUS_REMOVE_INVALID.to_string(),
        };
        self.enter(Mode::Idle, status);
        &self.state
    }

    pub fn submit_pending(&mut self) -> &SessionState {
        match self.state.mode.clone() {
            Mode::Adding { term, definition } => self.submit_add(&term, &definition),
            Mode::Removing { term } => self.submit_remove(&term),
            Mode::Idle | Mode::Testing(_) => &self.state,
        }
    }

    /// Starts a test over a fresh shuffle of the store. An open form is cancelled.
    pub fn start_test(&mut self) -> &SessionState {
        if self.is_testing() {
            return &self.state;
        }
        if self.store.is_empty() {
            self.enter(Mode::Idle, STATUS_NO_CARDS);
            return &self.state;
        }
        let mut deck = self.store.list().to_vec();
        deck.shuffle(&mut self.rng);
        info!(cards = deck.len(), "test started");
        self.enter(
            Mode::Testing(TestRun {
                deck,
                position: 0,
                answer_shown: false,
            }),
            "",
        );
        &self.state
    }

    pub fn show_answer(&mut self) -> &SessionState {
        if let Mode::Testing(run) = &mut self.state.mode {
            run.answer_shown = true;
        }
        &self.state
    }

    pub fn next_card(&mut self) -> &SessionState {
        let Mode::Testing(run) = &mut self.state.mode else {
            return &self.state;
        };
        if run.is_last() {
            info!(cards = run.deck.len(), "test completed");
            self.enter(Mode::Idle, STATUS_TEST_DONE);
        } else {
            run.position += 1;
            run.answer_shown = false;
            debug!(position = run.position, "next card");
        }
        &self.state
    }

    fn enter(&mut self, mode: Mode, status: impl Into<String>) {
        self.state.mode = mode;
        self.state.status = status.into();
        debug!(mode = ?self.state.mode, status = %self.state.status, "transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_placeholder_status() {
        let s = SessionController::with_seed(1);
        assert_eq!(s.mode(), &Mode::Idle);
        assert_eq!(s.status(), STATUS_INITIAL);
        assert_eq!(s.card_list().as_deref(), Some("Cards: "));
    }

    #[test]
    fn edits_only_touch_the_open_form() {
        let mut s = SessionController::with_seed(1);
        s.edit_term("ignored");
        assert_eq!(s.mode(), &Mode::Idle);

        s.toggle_remove();
        s.edit_term("x");
        s.edit_definition("not part of removal");
        assert_eq!(s.mode(), &Mode::Removing { term: "x".into() });
    }

    #[test]
    fn submit_pending_uses_form_fields() {
        let mut s = SessionController::with_seed(1);
        s.apply(Intent::ToggleAdd);
        s.apply(Intent::EditTerm("hola".into()));
        s.apply(Intent::EditDefinition("hello".into()));
        let st = s.apply(Intent::SubmitPending);
        assert_eq!(st.status, "Card Added. Total Cards: 1");
        assert_eq!(st.mode, Mode::Idle);
        assert_eq!(s.cards(), &[Flashcard::new("hola", "hello")]);
    }

    #[test]
    fn form_intents_ignored_while_testing() {
        let mut s = SessionController::with_seed(1);
        s.submit_add("a", "1");
        s.start_test();
        let before = s.state().clone();

        s.toggle_add();
        s.toggle_remove();
        s.submit_add("b", "2");
        s.submit_remove("a");
        s.start_test();
        assert_eq!(s.state(), &before);
        assert_eq!(s.cards().len(), 1);
        assert_eq!(s.card_list(), None);
    }

    #[test]
    fn state_serializes_with_mode_tag() {
        let mut s = SessionController::with_seed(1);
        s.toggle_add();
        let v = serde_json::to_value(s.state()).unwrap();
        assert_eq!(v["mode"]["mode"], "adding");
        assert_eq!(v["status"], STATUS_ENTER_CARD);
    }
}
