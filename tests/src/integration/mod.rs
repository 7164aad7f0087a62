//! # Integration Tests
//!
//! - `flows` - session operations recorded in the history log
//! - `persistence` - snapshots carried through history, codecs and restore
//! - `properties` - invariants over random operation sequences
//! - `concurrency` - a shared session driven from several threads

pub mod concurrency;
pub mod flows;
pub mod properties;
