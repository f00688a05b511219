//! Error classes of a currymix run and the process exit code each maps to.
//!
//! - 1: bad command line (handled before a run starts)
//! - 2: the order file is malformed
//! - 3: the order file does not exist
//! - 4: the order file exists but could not be read
//! - 5: anything else (config, verification, serialization)
//!
//! An infeasible order is not an error; it exits 0.

use currymix_input::LoadError;
use thiserror::Error;

/// Exit code for argument errors reported by clap.
pub const USAGE_EXIT_CODE: u8 = 1;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("runtime error: {0:#}")]
    Runtime(#[from] anyhow::Error),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Load(LoadError::Parse { .. }) => 2,
            RunError::Load(LoadError::NotFound { .. }) => 3,
            RunError::Load(LoadError::Read { .. }) => 4,
            RunError::Runtime(_) => 5,
        }
    }
}
