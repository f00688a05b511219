//! Library half of the `currymix` binary: config loading and exit-code mapping.
//!
//! `main.rs` imports `config` and `error` from here.

pub mod config;
pub mod error;
