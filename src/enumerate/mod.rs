pub mod bspade;
pub mod dspade;

use std::collections::HashMap;

use crate::pattern::{pattern_sort_key, split_last_step, Node, Pattern};

/// Groups nodes into equivalence classes by their `split_last_step` prefix.
/// Each class's members are sorted by `pattern_sort_key`; classes themselves
/// are returned in `pattern_sort_key(prefix)` order (spec.md §4.6).
pub(crate) fn group_by_prefix(nodes: Vec<Node>) -> Vec<(Pattern, Vec<Node>)> {
    let mut map: HashMap<Pattern, Vec<Node>> = HashMap::new();
    for n in nodes {
        let (prefix, _, _) = split_last_step(n.pattern());
        map.entry(prefix).or_default().push(n);
    }

    for members in map.values_mut() {
        members.sort_by_key(|a| pattern_sort_key(a.pattern()));
    }

    let mut classes: Vec<(Pattern, Vec<Node>)> = map.into_iter().collect();
    classes.sort_by_key(|a| pattern_sort_key(&a.0));
    classes
}

/// Sorts nodes by `pattern_sort_key` and drops duplicate patterns, keeping
/// the first occurrence. Required because S+S event-merge joins (and
/// cross-class collisions) can otherwise produce the same pattern twice
/// (spec.md §4.5, §9).
pub(crate) fn sort_and_dedup(mut nodes: Vec<Node>) -> Vec<Node> {
    nodes.sort_by_key(|a| pattern_sort_key(a.pattern()));
    let mut seen = std::collections::HashSet::new();
    nodes.retain(|n| seen.insert(n.pattern().clone()));
    nodes
}
