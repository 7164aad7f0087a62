//! # Shared Types Crate
//!
//! Plain data passed between the Bloom Visualizer subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: snapshots and operation payloads are defined
//!   here, so the filter engine and the history log stay independent.
//! - **Plain Data**: every type is built from vectors, strings and integers and
//!   derives serde, so a presentation layer can serialize it as-is.
//! - **Immutable Records**: a `FilterSnapshot` is a deep copy. Mutating the live
//!   engine after taking one never changes it.

pub mod entities;
pub mod errors;
pub mod operations;

pub use entities::FilterSnapshot;
pub use errors::CodecError;
pub use operations::{OperationKind, OperationPayload};
