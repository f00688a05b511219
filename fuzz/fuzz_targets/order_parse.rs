#![no_main]

//! Fuzz target for order text parsing.
//!
//! Arbitrary bytes must either parse into an order whose item ids are all in range, or fail
//! with an `InputError`. Never panic.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(order) = currymix_input::parse_order(s) {
        for customer in &order.customers {
            assert!(!customer.is_empty());
            for pref in customer.preferences() {
                assert!((1..=order.item_count).contains(&pref.item));
            }
        }
    }
});
