//! What a presentation adapter should show the player.
//!
//! `Reply` carries data, not markup. `Display` gives the default Russian
//! texts; `buttons` gives the keyboard labels.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::session::CatalogRef;

/// Label of the button that restarts the game.
pub const START_BUTTON: &str = "Старт";

/// A card shown in a round, with the number the player answers with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundCard {
    /// Card to attach.
    pub id: CardId,
    /// 1-based catalog position.
    pub label: usize,
}

/// One message for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// A new round: attach `cards` and ask for the card matching the word.
    Round {
        catalog: CatalogRef,
        cards: Vec<RoundCard>,
        riddle_word: Option<String>,
    },
    /// Verdict on the previous answer.
    Verdict { correct: bool, score: u32 },
    /// All cards shown; offer a restart.
    Exhausted,
    /// An answer arrived with no round pending.
    NoActiveRound,
    /// The requested album, or the default catalog, has no cards.
    AlbumEmpty,
    /// The album replaced the catalog.
    AlbumConnected { card_count: usize },
}

impl Reply {
    /// Keyboard labels for this reply. Empty when no keyboard is shown.
    #[must_use]
    pub fn buttons(&self) -> Vec<String> {
        match self {
            Reply::Round { cards, .. } => cards
                .iter()
                .map(|card| card.label.to_string())
                .chain(std::iter::once(START_BUTTON.to_string()))
                .collect(),
            Reply::Exhausted | Reply::NoActiveRound | Reply::AlbumEmpty => {
                vec![START_BUTTON.to_string()]
            }
            Reply::Verdict { .. } | Reply::AlbumConnected { .. } => Vec::new(),
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Round {
                riddle_word: Some(word),
                ..
            } => write!(f, "Укажите номер карточки, которая связана со словом: {}", word),
            Reply::Round { riddle_word: None, .. } => write!(f, "Укажите номер карточки"),
            Reply::Verdict { correct: true, score } => write!(f, "Верно 🎉\nВаш счет: {}", score),
            Reply::Verdict { correct: false, score } => write!(f, "Не верно 🙄\nВаш счет: {}", score),
            Reply::Exhausted => write!(f, "Карты закончились 😢 Отправьте Старт чтобы начать заново"),
            Reply::NoActiveRound => write!(f, "Отправьте слово \"Старт\" чтобы получить изображения"),
            Reply::AlbumEmpty => write!(
                f,
                "В переданном альбоме нет фотографий, отправьте Старт чтобы начать игру"
            ),
            Reply::AlbumConnected { card_count } => write!(
                f,
                "Альбом успешно подключен, количество карточек: {}",
                card_count
            ),
        }
    }
}
