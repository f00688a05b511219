use crate::finish::Finish;
use thiserror::Error;

/// 1-based item identifier.
pub type ItemId = usize;

/// A single "this item, with that finish" wish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preference {
    pub item: ItemId,
    pub finish: Finish,
}

impl Preference {
    pub fn new(item: ItemId, finish: Finish) -> Self {
        Self { item, finish }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a customer needs at least one preference")]
pub struct EmptyCustomer;

/// One customer's preferences, in the order they were given.
///
/// Never empty. A customer with a single preference is *singular* and must get exactly
/// that; a *plural* customer is happy when any one of its preferences holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    preferences: Vec<Preference>,
}

impl Customer {
    pub fn new(preferences: Vec<Preference>) -> Result<Self, EmptyCustomer> {
        if preferences.is_empty() {
            return Err(EmptyCustomer);
        }
        Ok(Self { preferences })
    }

    /// Convenience for tests and fixtures: `Customer::from_pairs([(1, Finish::Veg)])`.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (ItemId, Finish)>,
    ) -> Result<Self, EmptyCustomer> {
        Self::new(
            pairs
                .into_iter()
                .map(|(item, finish)| Preference::new(item, finish))
                .collect(),
        )
    }

    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    pub fn is_singular(&self) -> bool {
        self.preferences.len() == 1
    }
}

impl TryFrom<Vec<Preference>> for Customer {
    type Error = EmptyCustomer;

    fn try_from(preferences: Vec<Preference>) -> Result<Self, Self::Error> {
        Self::new(preferences)
    }
}

/// A fully parsed order: how many items there are and who wants what.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub item_count: usize,
    pub customers: Vec<Customer>,
}

impl Order {
    pub fn new(item_count: usize, customers: Vec<Customer>) -> Self {
        Self {
            item_count,
            customers,
        }
    }
}
