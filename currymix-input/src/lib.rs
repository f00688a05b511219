//! Order file ingestion.
//!
//! The first line holds the item count; every further non-blank line is one customer, written
//! as `<item-id> <finish-code>` pairs (`1 M 3 V 5 V`). Parsing is strict: anything that is not
//! a valid count (at most `MAX_ITEM_COUNT`), item id or finish code is an error, reported with its line number.

mod load;
mod parse;

pub use load::{LoadError, load_order};
pub use parse::{InputError, MAX_ITEM_COUNT, parse_order};
