use currymix_types::{Customer, Finish, FinishParseError, ItemId, Order, Preference};
use thiserror::Error;

/// Largest item count an order may declare. The assignment holds one finish per item.
pub const MAX_ITEM_COUNT: usize = 1_000_000;

/// A malformed order text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("line {line}: invalid item count '{token}'")]
    ItemCount { line: usize, token: String },

    #[error("line {line}: item count {count} exceeds the limit of {max}", max = MAX_ITEM_COUNT)]
    ItemCountTooLarge { line: usize, count: usize },

    #[error("line {line}: invalid item id '{token}'")]
    ItemId { line: usize, token: String },

    #[error("line {line}: item {item} is outside 1..={item_count}")]
    ItemOutOfRange {
        line: usize,
        item: ItemId,
        item_count: usize,
    },

    #[error("line {line}: item {item} has no finish code")]
    MissingFinish { line: usize, item: ItemId },

    #[error("line {line}: {source}")]
    Finish {
        line: usize,
        #[source]
        source: FinishParseError,
    },
}

impl InputError {
    pub fn line(&self) -> usize {
        match self {
            InputError::ItemCount { line, .. }
            | InputError::ItemCountTooLarge { line, .. }
            | InputError::ItemId { line, .. }
            | InputError::ItemOutOfRange { line, .. }
            | InputError::MissingFinish { line, .. }
            | InputError::Finish { line, .. } => *line,
        }
    }
}

/// Parse a whole order.
///
/// Empty text is an order with no items and no customers.
pub fn parse_order(text: &str) -> Result<Order, InputError> {
    let mut lines = text.lines().enumerate().map(|(idx, l)| (idx + 1, l));

    let Some((count_line, first)) = lines.next() else {
        return Ok(Order::default());
    };
    let item_count = parse_item_count(count_line, first)?;

    let mut customers = Vec::new();
    for (line, content) in lines {
        if let Some(customer) = parse_customer(line, content, item_count)? {
            customers.push(customer);
        }
    }

    Ok(Order::new(item_count, customers))
}

fn parse_item_count(line: usize, content: &str) -> Result<usize, InputError> {
    let token = content.trim();
    let count: usize = token.parse().map_err(|_| InputError::ItemCount {
        line,
        token: token.to_string(),
    })?;
    if count > MAX_ITEM_COUNT {
        return Err(InputError::ItemCountTooLarge { line, count });
    }
    Ok(count)
}

/// `None` for a blank line.
fn parse_customer(
    line: usize,
    content: &str,
    item_count: usize,
) -> Result<Option<Customer>, InputError> {
    let mut tokens = content.split_whitespace();
    let mut preferences = Vec::new();

    while let Some(item_token) = tokens.next() {
        let item = parse_item(line, item_token, item_count)?;
        let code = tokens
            .next()
            .ok_or(InputError::MissingFinish { line, item })?;
        let finish = code
            .parse::<Finish>()
            .map_err(|source| InputError::Finish { line, source })?;
        preferences.push(Preference::new(item, finish));
    }

    // Only a blank line leaves `preferences` empty.
    Ok(Customer::new(preferences).ok())
}

fn parse_item(line: usize, token: &str, item_count: usize) -> Result<ItemId, InputError> {
    let item: ItemId = token.parse().map_err(|_| InputError::ItemId {
        line,
        token: token.to_string(),
    })?;
    if item == 0 || item > item_count {
        return Err(InputError::ItemOutOfRange {
            line,
            item,
            item_count,
        });
    }
    Ok(item)
}
