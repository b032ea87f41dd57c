use super::message::Turn;

/// First thing the assistant says in every session
pub const GREETING: &str = "Hello, I am Yatra Sevak.AI How can I help you?";

/// Ordered, append-only history of turns for one session
///
/// Insertion order is chronological order is display order. A conversation
/// created with [`Conversation::initialize`] is never empty.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Create a conversation seeded with the greeting
    pub fn initialize() -> Self {
        tracing::debug!("Seeding conversation with greeting");

        Self {
            turns: vec![Turn::agent(GREETING)],
        }
    }

    /// Add a turn at the end of the history
    pub fn append(&mut self, turn: Turn) {
        tracing::debug!(
            "Appending {} turn ({} chars) at position {}",
            turn.speaker(),
            turn.text().len(),
            self.turns.len()
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            match turn.to_json() {
                Ok(json) => tracing::trace!("Turn: {}", json),
                Err(e) => tracing::trace!("Turn not serializable: {}", e),
            }
        }
        self.turns.push(turn);
    }

    /// All turns, oldest first
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// The trailing `limit` turns, or everything when `limit` is `None`
    pub fn recent(&self, limit: Option<usize>) -> &[Turn] {
        match limit {
            Some(n) if n < self.turns.len() => &self.turns[self.turns.len() - n..],
            _ => &self.turns,
        }
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
