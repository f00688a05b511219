use crate::finish::Finish;
use crate::order::ItemId;

/// One finish per item, for item ids `1..=item_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    finishes: Vec<Finish>,
}

impl Assignment {
    /// `finishes[0]` is the finish of item 1.
    pub fn from_finishes(finishes: Vec<Finish>) -> Self {
        Self { finishes }
    }

    pub fn item_count(&self) -> usize {
        self.finishes.len()
    }

    /// Finish of a 1-based item id, `None` outside `1..=item_count`.
    pub fn finish_of(&self, item: ItemId) -> Option<Finish> {
        item.checked_sub(1)
            .and_then(|idx| self.finishes.get(idx))
            .copied()
    }

    pub fn finishes(&self) -> &[Finish] {
        &self.finishes
    }

    /// `(item id, finish)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, Finish)> + '_ {
        self.finishes
            .iter()
            .enumerate()
            .map(|(idx, finish)| (idx + 1, *finish))
    }
}

/// Why a customer could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedReason {
    /// A singular customer wants a finish other than the one already fixed.
    SingularConflict {
        item: ItemId,
        fixed: Finish,
        requested: Finish,
    },
    /// Every preference of a plural customer names an item fixed to the other finish.
    AllPreferencesBlocked,
}

/// The customer the solver gave up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infeasibility {
    /// Position of the customer in the input order (0-based).
    pub customer: usize,
    pub reason: BlockedReason,
}

/// Result of a solve: either a full assignment or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Feasible(Assignment),
    Infeasible(Infeasibility),
}

impl Outcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Outcome::Feasible(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Outcome::Feasible(a) => Some(a),
            Outcome::Infeasible(_) => None,
        }
    }
}
