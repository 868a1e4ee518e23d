//! Session snapshots using `MessagePack`.
//!
//! A snapshot holds everything needed to resume play: position, boards,
//! both logs, the step counter, verbosity, and how the session ended (if it
//! did). Narration and read depth are not saved; snapshots are only taken
//! between submissions, when depth is zero.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chalkroom_engine::{InterpreterState, Termination};
use chalkroom_foundation::{Error, ErrorContext, Result, RoomId};
use chalkroom_storage::Blackboards;
use serde::{Deserialize, Serialize};

/// The persistent part of an interpreter state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current room.
    pub location: RoomId,
    /// Every room's board.
    pub blackboards: Blackboards,
    /// Normalized input so far.
    pub input_log: String,
    /// Buttons pressed so far.
    pub press_log: String,
    /// Steps executed so far.
    pub commands_executed: u64,
    /// Verbosity flag.
    pub verbose: bool,
    /// How the session ended, if it has.
    pub termination: Option<Termination>,
}

impl Snapshot {
    /// Captures a state.
    #[must_use]
    pub fn capture(state: &InterpreterState) -> Self {
        Self {
            location: state.location,
            blackboards: state.blackboards.clone(),
            input_log: state.input_log.clone(),
            press_log: state.press_log.clone(),
            commands_executed: state.commands_executed,
            verbose: state.verbose,
            termination: state.termination().cloned(),
        }
    }

    /// Rebuilds an interpreter state.
    #[must_use]
    pub fn into_state(self) -> InterpreterState {
        InterpreterState::restore(
            self.location,
            self.blackboards,
            self.input_log,
            self.press_log,
            self.commands_executed,
            self.verbose,
            self.termination,
        )
    }
}

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a snapshot to a file, creating or overwriting it.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file: {e}")).with_context(context()))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(snapshot)?;

    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(format!("failed to write file: {e}")).with_context(context()))?;

    log::debug!("saved snapshot ({} bytes) to {}", bytes.len(), path.display());
    Ok(())
}

/// Loads a snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file: {e}")).with_context(context()))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file: {e}")).with_context(context()))?;

    log::debug!("loaded snapshot ({} bytes) from {}", bytes.len(), path.display());
    from_bytes(&bytes).map_err(|e| e.with_context(context()))
}
