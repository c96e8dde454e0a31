//! Persistence: the NoteStore trait and its SQLite implementation

mod error;
mod repository;
pub mod sqlite;

pub use error::{StoreError, StoreResult};
pub use repository::{NewNote, NoteStore, Page};
pub use sqlite::{SqliteStore, Transaction, create_schema};
