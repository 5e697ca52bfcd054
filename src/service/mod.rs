//! Host-facing layer: collaborator boundaries and the `Game` facade.
//!
//! ## Boundaries
//!
//! - `CatalogSource`: resolves default and album catalogs
//! - `SessionStore`: loads and saves `UserSession`s
//! - `Reply`: what the presentation adapter renders
//! - `Command`: raw text to start / album switch / answer
//!
//! In-memory implementations of both traits are provided for tests and the
//! demo binary.

pub mod catalog_source;
pub mod command;
pub mod game;
pub mod reply;
pub mod store;

pub use catalog_source::{CatalogSource, MemoryCatalogSource};
pub use command::Command;
pub use game::Game;
pub use reply::{Reply, RoundCard, START_BUTTON};
pub use store::{MemorySessionStore, SessionStore};
