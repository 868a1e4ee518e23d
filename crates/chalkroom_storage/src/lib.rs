//! Room graph and blackboard storage for Chalkroom.
//!
//! This crate provides:
//! - [`RoomGraph`] - The fixed 26-room hexagonal keyboard topology
//! - [`Blackboards`] - The per-room mutable text buffers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod blackboard;
pub mod graph;

pub use blackboard::Blackboards;
pub use graph::{RoomGraph, RoomSpec};
