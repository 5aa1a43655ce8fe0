// Result card history
// Newest card first; the welcome placeholder is shown only while empty

use crate::api::QueryAnswer;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Text of the placeholder card shown while no results exist
pub const WELCOME_MESSAGE: &str =
    "Try asking me about weather or math! Use the examples above or type your own question.";

/// Heading used on error cards
pub const ERROR_HEADING: &str = "Error";

/// Whether a card holds an answer or an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Successful answer
    Answer,
    /// Validation or request error
    Error,
}

/// One rendered query/response or query/error pair
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    /// Answer or error
    pub kind: CardKind,
    /// Heading line: the query text, or "Error"
    pub heading: String,
    /// Agent label, present on answers only
    pub agent_label: Option<String>,
    /// Response text or error message
    pub body: String,
    /// Local time the card was created
    pub created_at: DateTime<Local>,
}

impl ResultCard {
    /// Card for a successful answer
    pub fn answer(answer: &QueryAnswer, created_at: DateTime<Local>) -> Self {
        Self {
            kind: CardKind::Answer,
            heading: answer.query.clone(),
            agent_label: Some(answer.agent_used.clone()),
            body: answer.response.clone(),
            created_at,
        }
    }

    /// Card for an error message
    pub fn error(message: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            kind: CardKind::Error,
            heading: ERROR_HEADING.to_string(),
            agent_label: None,
            body: message.into(),
            created_at,
        }
    }

    /// Whether this is an error card
    pub fn is_error(&self) -> bool {
        self.kind == CardKind::Error
    }

    /// Locale-style time of day, e.g. "3:04:05 PM"
    pub fn timestamp_label(&self) -> String {
        self.created_at.format("%-I:%M:%S %p").to_string()
    }
}

/// Ordered list of result cards
#[derive(Debug, Clone, Default)]
pub struct ResultsList {
    cards: VecDeque<ResultCard>,
}

impl ResultsList {
    /// Create an empty list (welcome placeholder visible)
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card at the top
    pub fn push(&mut self, card: ResultCard) {
        self.cards.push_front(card);
    }

    /// Drop every card, bringing the welcome placeholder back
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Whether the welcome placeholder should be rendered
    pub fn shows_welcome(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards, newest first
    pub fn cards(&self) -> impl Iterator<Item = &ResultCard> {
        self.cards.iter()
    }

    /// Newest card, if any
    pub fn latest(&self) -> Option<&ResultCard> {
        self.cards.front()
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether there are no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
