use crate::parse::{InputError, parse_order};
use camino::{Utf8Path, Utf8PathBuf};
use currymix_types::Order;
use fs_err as fs;
use std::io;
use thiserror::Error;
use tracing::debug;

/// Why an order file could not be turned into an [`Order`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {path}")]
    NotFound {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: InputError,
    },
}

impl LoadError {
    pub fn path(&self) -> &Utf8Path {
        match self {
            LoadError::NotFound { path, .. }
            | LoadError::Read { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

pub fn load_order(path: &Utf8Path) -> Result<Order, LoadError> {
    debug!(path = %path, "loading order");

    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let order = parse_order(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        item_count = order.item_count,
        customers = order.customers.len(),
        "loaded order"
    );
    Ok(order)
}
