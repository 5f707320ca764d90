//! Property-based test generators using proptest.

use hostvol_volume::VolumeId;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Strategy for generating volume IDs.
pub fn volume_id_strategy() -> impl Strategy<Value = VolumeId> {
    prop::string::string_regex("[a-z0-9][a-z0-9-]{0,35}")
        .expect("Invalid regex")
        .prop_map(VolumeId::from)
}

/// Strategy for generating provider names the manager accepts.
///
/// Never produces the reserved default name.
pub fn provider_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,15}")
        .expect("Invalid regex")
        .prop_filter("Reserved name", |name| name != "default")
}

/// Strategy for generating a sequence of distinct volume IDs.
pub fn distinct_ids_strategy(max_len: usize) -> impl Strategy<Value = Vec<VolumeId>> {
    prop::collection::btree_set(volume_id_strategy(), 0..=max_len)
        .prop_map(|ids: BTreeSet<VolumeId>| ids.into_iter().collect())
}

/// Strategy for generating ID sequences that may contain repeats.
pub fn id_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<VolumeId>> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(VolumeId::from),
        0..=max_len,
    )
}
