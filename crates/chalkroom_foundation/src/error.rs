//! Error types for Chalkroom.
//!
//! Player input never produces an error: malformed commands become
//! narration. These types cover host-side failures only (files, snapshots,
//! configuration, the terminal).

use std::fmt;

use thiserror::Error;

/// The main error type for Chalkroom operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates a snapshot encoding/decoding error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Creates an unknown room error.
    #[must_use]
    pub fn unknown_room(key: char) -> Self {
        Self::new(ErrorKind::UnknownRoom(key))
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A configuration value or command-line argument was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A room key outside the keyboard was referenced.
    #[error("unknown room: {0:?}")]
    UnknownRoom(char),

    /// A REPL meta command that does not exist.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A REPL meta command used with the wrong arguments.
    #[error("usage: {0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Semantic limits (kill switches) that can be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SemanticLimit {
    /// Too many command steps executed in one session.
    MaxCommands {
        /// The configured limit.
        limit: u64,
    },
    /// Blackboard reads nested too deeply.
    MaxDepth {
        /// The configured limit.
        limit: u32,
    },
    /// A blackboard grew too long.
    MaxBlackboardLength {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for SemanticLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxCommands { limit } => write!(f, "max commands ({limit}) exceeded"),
            Self::MaxDepth { limit } => write!(f, "max read depth ({limit}) exceeded"),
            Self::MaxBlackboardLength { limit } => {
                write!(f, "max blackboard length ({limit}) reached")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file (script or snapshot).
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        Ok(())
    }
}
