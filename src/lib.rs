//! Chalkroom - A text adventure whose blackboards are programs
//!
//! This crate re-exports all layers of the Chalkroom system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: chalkroom_runtime    - Sessions, REPL, CLI, snapshots
//! Layer 3: chalkroom_engine     - Recursive interpreter, kill switches
//! Layer 2: chalkroom_parser     - Input normalization, command decoding
//! Layer 1: chalkroom_storage    - Room graph, blackboards
//! Layer 0: chalkroom_foundation - Rooms, directions, limits, errors
//! ```

pub use chalkroom_engine as engine;
pub use chalkroom_foundation as foundation;
pub use chalkroom_parser as parser;
pub use chalkroom_runtime as runtime;
pub use chalkroom_storage as storage;
