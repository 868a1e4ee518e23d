//! Integration tests for Layer 4: Runtime
//!
//! End-to-end play-throughs through sessions, plus snapshots.

mod scenarios;
mod snapshots;
