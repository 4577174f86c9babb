use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy for generating batches of item ids, duplicates allowed
pub fn item_batch_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..40, 0..24)
}

/// Strategy for generating the set of ids whose processing fails
pub fn failing_ids_strategy() -> impl Strategy<Value = HashSet<i64>> {
    prop::collection::hash_set(1i64..40, 0..12)
}
