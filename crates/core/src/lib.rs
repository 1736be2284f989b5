#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Turns static drawing objects exported by PaintCode into configurable,
//! reusable view classes.
//!
//! The entry points are [`transpile`] for single-file Swift sources and
//! [`legacy::transpile_pair`] for Objective-C header/implementation pairs.

pub mod config;
pub mod legacy;
pub mod source;
pub mod transpiler;

pub use config::types::{Dialect, TranspilerConfig};
pub use transpiler::{Declaration, Transpilation, Transpiler, transpile};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
