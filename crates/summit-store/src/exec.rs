//! Query-plan execution over the record map.

use crate::codec::decode;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use summit_core::query::QueryPlan;
use summit_core::{Entity, EntityKey, Record, Result};

/// Scans every record of `R`'s kind (optionally restricted to an ancestor
/// subtree), keeps the ones matching the plan's predicates, and sorts the
/// result by the plan's sort keys with the entity key as final tiebreaker.
pub(crate) fn run_query<R: Record>(
    records: &BTreeMap<Vec<u8>, Vec<u8>>,
    ancestor: Option<&EntityKey>,
    plan: &QueryPlan<R::Field>,
) -> Result<Vec<Entity<R>>> {
    let mut results = Vec::new();
    for (key_bytes, value) in records {
        let key = EntityKey::from_storage_bytes(key_bytes)?;
        if key.kind() != R::kind() {
            continue;
        }
        if let Some(ancestor) = ancestor {
            if !key.has_ancestor(ancestor) {
                continue;
            }
        }
        let record: R = decode(value)?;
        if plan.matches(&record) {
            results.push(Entity::new(key, record));
        }
    }
    sort_entities(&mut results, plan);
    Ok(results)
}

fn sort_entities<R: Record>(entities: &mut [Entity<R>], plan: &QueryPlan<R::Field>) {
    entities.sort_by(|a, b| {
        for &field in plan.sort() {
            let ordering = a.record.field(field).sort_cmp(&b.record.field(field));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.key.cmp(&b.key)
    });
}
