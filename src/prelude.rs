//! Prelude module for the jalaali crate.
//!
//! Re-exports the derive macros and arithmetic primitives used across modules.

pub use crate::math::{div, div_wide, modulo, modulo_wide};
pub use derive_more::Display;
