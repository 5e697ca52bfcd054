//! Card catalog: ordered, immutable card lookup.
//!
//! A `CardCatalog` is either the default card set or a per-user album. Card
//! order is stable and defines the 1-based index shown to players, so the
//! catalog keeps cards in a `Vec` and an id index on the side.

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::card::{Card, CardId};
use crate::error::{Error, Result};

/// Ordered mapping from card identifier to card.
///
/// ## Example
///
/// ```
/// use riddle_cards::cards::{Card, CardCatalog, CardId};
///
/// let catalog = CardCatalog::from_cards(vec![
///     Card::new("a", "кот сидит"),
///     Card::new("b", "пес бежит"),
/// ]).unwrap();
///
/// assert_eq!(catalog.position(&CardId::new("b")), Some(2));
/// assert_eq!(catalog.card_at(1).unwrap().id, CardId::new("a"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from cards in display order.
    ///
    /// Fails on the first duplicated identifier.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.push(card)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON object of `id -> text` entries.
    ///
    /// Values may be a plain string, a number, or an object with a `text`
    /// field (photo items). Anything else becomes a card without text.
    ///
    /// Integer keys come first in ascending numeric order, then the other
    /// keys in document order. Photo albums are keyed by numeric photo id,
    /// so this keeps their labels in upload order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: serde_json::Map<String, Value> = serde_json::from_str(json)?;
        let (mut indexed, named): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .map(|(id, value)| (array_index(&id), id, value))
            .partition(|(index, _, _)| index.is_some());
        indexed.sort_by_key(|(index, _, _)| *index);

        Self::from_cards(indexed.into_iter().chain(named).map(|(_, id, value)| Card {
            id: CardId(id),
            text: text_of(&value),
        }))
    }

    /// Append a card at the end of the display order.
    pub fn push(&mut self, card: Card) -> Result<()> {
        if self.index.contains_key(&card.id) {
            return Err(Error::DuplicateCard(card.id));
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// 1-based display position of a card.
    #[must_use]
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.index.get(id).map(|&i| i + 1)
    }

    /// Card at a 1-based display position.
    ///
    /// Position 0 and positions past the end yield `None`.
    #[must_use]
    pub fn card_at(&self, position: usize) -> Option<&Card> {
        position.checked_sub(1).and_then(|i| self.cards.get(i))
    }

    /// Iterate over card IDs in display order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(|c| &c.id)
    }

    /// Iterate over cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Canonical decimal key below `u32::MAX`: no sign, no leading zeros.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok().filter(|&index| index < u32::MAX)
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(fields) => match fields.get("text") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}
