//! Qwirkle (workspace facade crate).
//!
//! This package exposes `qwirkle::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use qwirkle_core as core;
pub use qwirkle_input as input;
pub use qwirkle_term as term;
pub use qwirkle_types as types;
