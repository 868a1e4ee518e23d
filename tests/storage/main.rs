//! Integration tests for Layer 1: Storage
//!
//! Tests for the room graph and blackboards.

mod blackboards;
mod graph;
