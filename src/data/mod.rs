//! In-memory records and the sample datasets the screens render.
//!
//! Nothing here is persisted; every record lives for one run of the program.

pub mod flashcards;
pub mod materials;
pub mod progress;
pub mod user;
