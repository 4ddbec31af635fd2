//! # wd-core
//!
//! Error definitions and the `ensure!` validation macro shared by the
//! waydate-rs workspace crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
