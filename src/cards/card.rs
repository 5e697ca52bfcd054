//! Cards: an opaque identifier plus free-form text.

use serde::{Deserialize, Serialize};

/// Catalog-unique card identifier.
///
/// Opaque to the engine. The default catalog uses the keys of its card file,
/// album catalogs use photo ids.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A catalog entry.
///
/// `text` is `None` when the source had no usable text for the card; such a
/// card contributes no words to a round.
///
/// ## Example
///
/// ```
/// use riddle_cards::cards::{Card, CardId};
///
/// let card = Card::new("7", "Кот сидит");
/// assert_eq!(card.id, CardId::new("7"));
/// assert_eq!(card.text(), Some("Кот сидит"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the owning catalog.
    pub id: CardId,

    /// Associated text, possibly multi-word.
    pub text: Option<String>,
}

impl Card {
    /// Create a card with text.
    #[must_use]
    pub fn new(id: impl Into<CardId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
        }
    }

    /// Create a card whose text is missing.
    #[must_use]
    pub fn without_text(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            text: None,
        }
    }

    /// Get the card text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
