//! Ports Layer
//!
//! Defines the driving port a presentation layer calls into.

pub mod inbound;

pub use inbound::{CheckResult, ParamUpdate, Verdict, VisualizerApi};
