//! Core types for Chalkroom.
//!
//! This crate provides:
//! - [`RoomId`] - Identity of one of the 26 keyboard rooms
//! - [`Direction`] - The six hexagonal movement directions
//! - [`Limits`] - Resource ceilings enforced by the interpreter
//! - [`Error`] - Rich error types for host-side failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod limits;
pub mod room;

pub use direction::Direction;
pub use error::{Error, ErrorContext, ErrorKind, SemanticLimit};
pub use limits::Limits;
pub use room::RoomId;

/// Result type alias using Chalkroom's Error type.
pub type Result<T> = std::result::Result<T, Error>;
