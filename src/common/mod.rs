//! Common types and utilities shared across the index.
//!
//! This module contains the fundamental primitives:
//! - Configuration constants
//! - Error types
//! - The [`MinDegree`] parameter and the [`Key`] type

pub mod config;
mod degree;
pub mod error;

pub use degree::MinDegree;
pub use error::{Error, Result};

/// Keys stored in the tree.
///
/// Keys are fixed to a totally ordered integer type.
pub type Key = i64;
