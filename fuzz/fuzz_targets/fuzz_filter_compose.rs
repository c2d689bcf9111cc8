#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use summit_core::query::{QueryPlan, RawFilter};

#[derive(Debug, Arbitrary)]
struct FuzzFilter {
    field: String,
    operator: String,
    value: String,
}

fuzz_target!(|filters: Vec<FuzzFilter>| {
    // Limit filter count to prevent timeout
    if filters.len() > 64 {
        return;
    }

    let raw: Vec<RawFilter> = filters
        .iter()
        .map(|f| RawFilter::new(&f.field, &f.operator, &f.value))
        .collect();

    // Composing a plan from arbitrary tokens should never panic
    if let Ok(plan) = QueryPlan::for_conferences(&raw) {
        // A composed plan always ends its sort order with the name tiebreak
        assert!(!plan.sort().is_empty());
        assert_eq!(plan.filters().len(), raw.len());
    }
});
