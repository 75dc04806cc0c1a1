use std::collections::HashMap;

use tracing::{trace, warn};

use crate::pattern::{pattern_sort_key, split_last_step, Item, Node, Pattern, StepType};
use crate::stats::StatsCounter;
use crate::tidlist::{i_join, s_join, TidList};

/// Computes the raw (pattern, tid-list) candidates spec.md §4.5's join
/// table describes for two nodes from the same equivalence class, with no
/// filtering, deduplication or stats recording. Split out from
/// `join_in_class` so the enumerators can run this half of the work — pure
/// tid-list arithmetic, no shared state — in parallel across class pairs
/// with `rayon`, and do the sequential bookkeeping (`finalize_candidates`)
/// once all pairs have been joined.
pub fn join_pair_candidates(a: &Node, b: &Node) -> Vec<(Pattern, TidList)> {
    let (pa, ta, xa) = split_last_step(a.pattern());
    let (pb, tb, xb) = split_last_step(b.pattern());
    if pa != pb {
        return Vec::new();
    }

    let mut candidates: Vec<(Pattern, TidList)> = Vec::new();

    match (ta, tb) {
        (StepType::I, StepType::I) => {
            let last_ev = a.pattern().last().unwrap();
            let mut new_ev: Vec<Item> = last_ev.clone();
            if !new_ev.contains(&xb) {
                new_ev.push(xb);
            }
            new_ev.sort();
            let mut pat = a.pattern()[..a.pattern().len() - 1].to_vec();
            pat.push(new_ev);
            let tl = i_join(a.tidlist(), b.tidlist());
            candidates.push((pat, tl));
        }
        (StepType::I, StepType::S) => {
            let mut pat = a.pattern().clone();
            pat.push(vec![xb]);
            let tl = s_join(a.tidlist(), b.tidlist());
            candidates.push((pat, tl));
        }
        (StepType::S, StepType::I) => {
            let mut pat = b.pattern().clone();
            pat.push(vec![xa]);
            let tl = s_join(b.tidlist(), a.tidlist());
            candidates.push((pat, tl));
        }
        (StepType::S, StepType::S) => {
            // (i) event-merge
            let mut ev = vec![xa.clone(), xb.clone()];
            ev.sort();
            let mut pat_event = pa.clone();
            pat_event.push(ev);
            let tl_event = i_join(a.tidlist(), b.tidlist());
            candidates.push((pat_event, tl_event));

            // (ii) a -> b
            let mut pat_ab = a.pattern().clone();
            pat_ab.push(vec![xb.clone()]);
            let tl_ab = s_join(a.tidlist(), b.tidlist());
            candidates.push((pat_ab, tl_ab));

            // (iii) b -> a
            let mut pat_ba = b.pattern().clone();
            pat_ba.push(vec![xa.clone()]);
            let tl_ba = s_join(b.tidlist(), a.tidlist());
            candidates.push((pat_ba, tl_ba));
        }
    }

    candidates
}

/// Applies the `maxElts` filter, the attempted-stats recording, the minsup
/// filter, and pattern dedup to a batch of raw candidates (see
/// SPEC_FULL.md §10 for the maxElts discard-timing decision: a candidate
/// whose `elts` exceeds the cap is dropped before it is ever recorded as
/// attempted). Survivors are returned in `pattern_sort_key` order.
pub fn finalize_candidates(
    raw: Vec<(Pattern, TidList)>,
    minsup: usize,
    max_elts: Option<usize>,
    mut stats: Option<&mut StatsCounter>,
) -> Vec<Node> {
    let batch_size = raw.len();
    let mut max_elts_discarded = 0usize;
    trace!(batch_size, max_elts = ?max_elts, "joining class-pair batch");

    let mut kept: HashMap<Pattern, Node> = HashMap::new();
    for (pat, tl) in raw {
        if let Some(cap) = max_elts {
            let elts: usize = pat.iter().map(|ev| ev.len()).sum();
            if elts > cap {
                max_elts_discarded += 1;
                continue;
            }
        }

        let length = pat.len();
        let tl_len = tl.len();
        if let Some(s) = stats.as_deref_mut() {
            s.add_attempted(length, tl_len);
        }
        let node = Node::new(pat, tl);
        if node.sup() >= minsup {
            kept.entry(node.pattern().clone()).or_insert(node);
        }
    }

    if max_elts.is_some() && batch_size > 0 && max_elts_discarded == batch_size {
        warn!(batch_size, max_elts = ?max_elts, "maxElts filter discarded every candidate in this class");
    }

    let mut result: Vec<Node> = kept.into_values().collect();
    result.sort_by_key(|x| pattern_sort_key(x.pattern()));
    trace!(batch_size, survivors = result.len(), "class-pair batch finalized");
    result
}

/// Joins two nodes from the same equivalence class. Convenience wrapper
/// around `join_pair_candidates` + `finalize_candidates` for call sites
/// that don't need to batch multiple pairs (tests, single-pair callers).
pub fn join_in_class(
    a: &Node,
    b: &Node,
    minsup: usize,
    max_elts: Option<usize>,
    stats: Option<&mut StatsCounter>,
) -> Vec<Node> {
    finalize_candidates(join_pair_candidates(a, b), minsup, max_elts, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tidlist::Tid;

    fn node(pattern: Pattern, tids: Vec<(u32, u32)>) -> Node {
        Node::new(pattern, tids.into_iter().map(|(s, e)| Tid::new(s, e)).collect())
    }

    #[test]
    fn i_plus_i_extends_last_event() {
        let a = node(vec![vec!["A".into(), "B".into()]], vec![(1, 1), (2, 1)]);
        let b = node(vec![vec!["A".into(), "C".into()]], vec![(1, 1), (2, 1)]);
        let out = join_in_class(&a, &b, 1, None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].pattern(), &vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]);
    }

    #[test]
    fn s_plus_s_emits_three_candidates() {
        // sid1: A,B in the same event; sid2: A then B; sid3: B then A.
        let a = node(vec![vec!["A".into()], vec!["B".into()]], vec![(1, 1), (2, 1), (3, 2)]);
        let b = node(vec![vec!["A".into()], vec!["C".into()]], vec![(1, 1), (2, 2), (3, 1)]);
        let out = join_in_class(&a, &b, 1, None, None);
        let patterns: Vec<Pattern> = out.iter().map(|n| n.pattern().clone()).collect();
        assert!(patterns.contains(&vec![vec!["A".to_string()], vec!["B".to_string(), "C".to_string()]]));
        assert!(patterns.contains(&vec![vec!["A".to_string()], vec!["B".to_string()], vec!["C".to_string()]]));
        assert!(patterns.contains(&vec![vec!["A".to_string()], vec!["C".to_string()], vec!["B".to_string()]]));
    }

    #[test]
    fn max_elts_filters_before_support_check() {
        // sid1: A,B in the same event; sid2: A then B; sid3: B then A.
        let a = node(vec![vec!["A".into()]], vec![(1, 1), (2, 1), (3, 2)]);
        let b = node(vec![vec!["B".into()]], vec![(1, 1), (2, 2), (3, 1)]);

        // All three S+S candidates here have elts=2: event-merge <{A B}>,
        // a->b <{A}->{B}>, b->a <{B}->{A}>.
        let out = join_in_class(&a, &b, 1, Some(2), None);
        assert_eq!(out.len(), 3);

        // Capping at 1 discards every candidate before the support check.
        let out = join_in_class(&a, &b, 1, Some(1), None);
        assert!(out.is_empty());
    }
}
