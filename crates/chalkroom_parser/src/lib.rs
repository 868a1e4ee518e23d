//! Command-line parsing for the blackboard dungeon.
//!
//! Player input is reduced to a run of lowercase letters, then decoded one
//! command at a time. The same decoder runs over blackboard text when a
//! board is read, which is why decoding is incremental rather than a
//! whole-line parse.
//!
//! # Architecture
//!
//! ```text
//! "T hello, There!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → "thellothere"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND READER  │  → Write("hellothere"), rest = ""
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`normalize`] - Strip everything but lowercase letters
//! - [`command`] - The closed command set and the step decoder

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod normalize;

pub use command::{Command, CommandReader, Decoded};
pub use normalize::InputNormalizer;
