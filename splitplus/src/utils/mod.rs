//! Shared utilities for splitplus
//!
//! Location types used by scan errors and log events.

pub mod span;

pub use span::{Position, Span};
