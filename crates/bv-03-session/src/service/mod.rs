//! Service Layer
//!
//! Performs engine operations and records each outcome in the history log.

pub mod session;
pub mod shared;

pub use session::VisualizerSession;
pub use shared::SharedSession;
