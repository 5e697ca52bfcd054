//! Card system: cards, catalogs, and word extraction.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque, catalog-unique card identifier
//! - `Card`: Identifier plus free-form text
//! - `CardCatalog`: Ordered card lookup with 1-based display positions
//! - `WordExtractor`: Normalizes card text into riddle words

pub mod card;
pub mod catalog;
pub mod words;

pub use card::{Card, CardId};
pub use catalog::CardCatalog;
pub use words::{extract_words, WhitespaceWords, WordExtractor};
