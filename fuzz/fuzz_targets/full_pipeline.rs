#![no_main]

//! Fuzz target for parse -> solve -> verify -> render.
//!
//! Any order the parser accepts must solve without panicking, and a feasible answer must
//! pass the independent check and render to one code per item.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(order) = currymix_input::parse_order(s) else {
        return;
    };
    assert!(order.item_count <= currymix_input::MAX_ITEM_COUNT);

    let outcome = currymix_domain::solve_order(&order);
    let text = currymix_render::render_text(&outcome);

    if let Some(assignment) = outcome.assignment() {
        assert!(currymix_domain::verify(assignment, &order.customers).is_ok());
        assert_eq!(assignment.item_count(), order.item_count);
        assert_eq!(text.split_whitespace().count(), order.item_count);
    } else {
        assert_eq!(text, currymix_render::NO_SOLUTION_EXISTS);
    }
});
