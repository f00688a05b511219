use currymix_types::{
    Assignment, BlockedReason, Customer, Finish, Infeasibility, ItemId, Order, Outcome, Preference,
};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Items committed to a finish so far. Grows only; an item is never re-fixed.
#[derive(Debug, Default)]
struct FixedAssignment {
    fixed: BTreeMap<ItemId, Finish>,
}

impl FixedAssignment {
    fn get(&self, item: ItemId) -> Option<Finish> {
        self.fixed.get(&item).copied()
    }

    fn fix(&mut self, pref: Preference) {
        let finish = *self.fixed.entry(pref.item).or_insert(pref.finish);
        debug_assert_eq!(finish, pref.finish, "item {} re-fixed", pref.item);
    }

    fn into_assignment(self, item_count: usize) -> Assignment {
        Assignment::from_finishes(
            (1..=item_count)
                .map(|item| self.get(item).unwrap_or(Finish::CHEAPEST))
                .collect(),
        )
    }
}

enum Decision {
    Fix(Preference),
    Satisfied,
    Blocked(BlockedReason),
}

/// Assign a finish to every item `1..=item_count` so each customer gets at least one wish.
///
/// Customers are handled in one pass, fewest preferences first (input order breaks ties), so
/// the hard constraints of singular customers are in place before any plural customer is
/// looked at. Items nobody needed get [`Finish::CHEAPEST`].
///
/// Returns [`Outcome::Infeasible`] as soon as one customer cannot be satisfied.
pub fn solve(item_count: usize, customers: &[Customer]) -> Outcome {
    // `sort_by_key` is stable.
    let mut ordered: Vec<(usize, &Customer)> = customers.iter().enumerate().collect();
    ordered.sort_by_key(|(_, customer)| customer.len());

    debug!(item_count, customers = customers.len(), "solving order");

    let mut fixed = FixedAssignment::default();
    for (position, customer) in ordered {
        let decision = match customer.preferences() {
            [only] => decide_singular(&fixed, *only),
            prefs => decide_plural(&fixed, prefs),
        };

        match decision {
            Decision::Fix(pref) => {
                trace!(customer = position, item = pref.item, finish = %pref.finish, "fixed");
                fixed.fix(pref);
            }
            Decision::Satisfied => {
                trace!(customer = position, "already satisfied");
            }
            Decision::Blocked(reason) => {
                debug!(customer = position, ?reason, "no feasible assignment");
                return Outcome::Infeasible(Infeasibility {
                    customer: position,
                    reason,
                });
            }
        }
    }

    Outcome::Feasible(fixed.into_assignment(item_count))
}

pub fn solve_order(order: &Order) -> Outcome {
    solve(order.item_count, &order.customers)
}

fn decide_singular(fixed: &FixedAssignment, pref: Preference) -> Decision {
    match fixed.get(pref.item) {
        Some(current) if current != pref.finish => {
            Decision::Blocked(BlockedReason::SingularConflict {
                item: pref.item,
                fixed: current,
                requested: pref.finish,
            })
        }
        _ => Decision::Fix(pref),
    }
}

fn decide_plural(fixed: &FixedAssignment, prefs: &[Preference]) -> Decision {
    let mut candidates = Vec::new();
    for pref in prefs {
        match fixed.get(pref.item) {
            Some(current) if current == pref.finish => return Decision::Satisfied,
            Some(_) => {}
            None => candidates.push(*pref),
        }
    }

    // Last candidate asking for the cheap finish, else the first candidate.
    let choice = candidates
        .iter()
        .rev()
        .find(|pref| pref.finish.is_cheapest())
        .or_else(|| candidates.first());

    match choice {
        Some(pref) => Decision::Fix(*pref),
        None => Decision::Blocked(BlockedReason::AllPreferencesBlocked),
    }
}
