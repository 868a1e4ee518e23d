//! Sessions, REPL, CLI, and snapshots for Chalkroom.
//!
//! This crate provides:
//! - [`Session`] - One isolated game: interpreter state plus narration
//! - [`Repl`] - Interactive read-eval-print loop
//! - Room descriptions in the fixed narration format
//! - Session snapshots in `MessagePack`
//! - Command-line parsing for the `chalkroom` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod describe;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod serialize;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use serialize::Snapshot;
pub use session::Session;
