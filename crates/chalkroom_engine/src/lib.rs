//! Recursive command interpreter for Chalkroom.
//!
//! This crate provides:
//! - [`Interpreter`] - Executes command lines, recursing into blackboards
//! - [`InterpreterState`] - The mutable execution context of one session
//! - [`GameConfig`] - Limits, start room, and press target
//! - [`Narration`] - Depth-gated output buffer
//!
//! # Execution Model
//!
//! ```text
//! execute(line, depth 0)
//!   ├─ step: move / write / press ...
//!   ├─ step: r ──► execute(board text, depth 1)
//!   │               ├─ step ...
//!   │               └─ step: r ──► execute(..., depth 2) ...
//!   └─ step ...
//! ```
//!
//! Every step, at any depth, draws on the same step budget. Reads nest as
//! ordinary calls and are capped by an explicit depth check.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod interpreter;
pub mod narration;
pub mod press;
pub mod state;

pub use config::GameConfig;
pub use interpreter::Interpreter;
pub use narration::Narration;
pub use press::{PressTarget, PressVerdict};
pub use state::{InterpreterState, Termination};
