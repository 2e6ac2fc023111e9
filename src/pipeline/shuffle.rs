use std::collections::HashMap;

use tracing::trace;

use crate::pipeline::worker::KeyValue;

/// Every value shuffled under one key, prior to reduction.
pub type Groups = HashMap<String, Vec<u64>>;

/// Groups the complete mapper output by key.
///
/// This is the synchronization barrier of the pipeline: callers must pass
/// the full multiset of pairs, never a prefix, or reducers would see
/// partial groups. Grouping runs on a single thread — sharing the map
/// across tasks would buy locking, not speed, at this data size. Insertion
/// order within a group does not matter (values are summed), but every
/// pair lands in exactly one group.
pub fn shuffle(pairs: Vec<KeyValue>) -> Groups {
    let mut groups = Groups::new();
    for pair in pairs {
        let (key, value) = pair.into_parts();
        groups.entry(key).or_default().push(value);
    }
    trace!(keys = groups.len(), "grouping finished");
    groups
}
