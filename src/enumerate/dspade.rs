use rayon::prelude::*;
use tracing::trace;

use crate::candidates::{finalize_candidates, join_pair_candidates};
use crate::enumerate::{group_by_prefix, sort_and_dedup};
use crate::error::MiningError;
use crate::f1f2::{gen_f2, F1Entry};
use crate::pattern::{pattern_sort_key, Node, Pattern};
use crate::sink::DiscoverySink;
use crate::stats::StatsCounter;
use crate::tidlist::TidList;

/// Depth-first equivalence-class enumerator (spec.md §4.6). Shared core for
/// `dspade` and `maxelts_dspade`; `max_elts` is `None` for the unconstrained
/// variant.
fn run(
    f1_nodes: &[Node],
    minsup: usize,
    max_elts: Option<usize>,
    sink: &mut dyn DiscoverySink,
    mut stats: Option<&mut StatsCounter>,
) -> Result<Vec<Node>, MiningError> {
    let mut discovered = Vec::new();

    let mut f1_sorted = f1_nodes.to_vec();
    f1_sorted.sort_by_key(|a| pattern_sort_key(a.pattern()));
    for n in &f1_sorted {
        if max_elts.is_some_and(|cap| n.elts() > cap) {
            continue;
        }
        emit(n, sink, stats.as_deref_mut())?;
        discovered.push(n.clone());
    }
    trace!(count = f1_sorted.len(), "F1 emitted");

    let mut f1_entries: Vec<F1Entry> = f1_nodes
        .iter()
        .map(|n| (n.pattern()[0][0].clone(), n.tidlist().to_vec(), n.sup()))
        .collect();
    f1_entries.sort_by(|a, b| a.0.cmp(&b.0));

    let f2_raw = gen_f2(&f1_entries, minsup, max_elts, stats.as_deref_mut());
    let mut f2_nodes: Vec<Node> = f2_raw
        .into_iter()
        .map(|(pat, tl, _)| Node::new(pat, tl))
        .collect();
    f2_nodes.sort_by_key(|a| pattern_sort_key(a.pattern()));
    for n in &f2_nodes {
        emit(n, sink, stats.as_deref_mut())?;
        discovered.push(n.clone());
    }
    trace!(count = f2_nodes.len(), "F2 emitted");

    for (_prefix, class_nodes) in group_by_prefix(f2_nodes) {
        recurse(class_nodes, minsup, max_elts, sink, stats.as_deref_mut(), &mut discovered)?;
    }

    Ok(discovered)
}

fn emit(
    node: &Node,
    sink: &mut dyn DiscoverySink,
    stats: Option<&mut StatsCounter>,
) -> Result<(), MiningError> {
    let mut stats = stats;
    if let Some(s) = stats.as_deref_mut() {
        s.add_candidate(node);
    }
    sink.on_discover(node)
        .map_err(|e| MiningError::Sink(e.to_string()))?;
    if let Some(s) = stats {
        s.add_discovered(node);
    }
    Ok(())
}

fn recurse(
    class_nodes: Vec<Node>,
    minsup: usize,
    max_elts: Option<usize>,
    sink: &mut dyn DiscoverySink,
    mut stats: Option<&mut StatsCounter>,
    discovered: &mut Vec<Node>,
) -> Result<(), MiningError> {
    let pairs: Vec<(usize, usize)> = (0..class_nodes.len())
        .flat_map(|i| ((i + 1)..class_nodes.len()).map(move |j| (i, j)))
        .collect();

    // Tid-list arithmetic per pair has no shared state, so it parallelizes
    // cleanly; the sequential finalize pass below keeps stats recording and
    // discovery order deterministic.
    let raw: Vec<(Pattern, TidList)> = pairs
        .par_iter()
        .flat_map(|&(i, j)| join_pair_candidates(&class_nodes[i], &class_nodes[j]))
        .collect();

    let next_level = finalize_candidates(raw, minsup, max_elts, stats.as_deref_mut());
    if let Some(s) = stats.as_deref_mut() {
        for c in &next_level {
            s.add_candidate(c);
        }
    }

    if next_level.is_empty() {
        return Ok(());
    }

    let next_level = sort_and_dedup(next_level);
    for n in &next_level {
        sink.on_discover(n)
            .map_err(|e| MiningError::Sink(e.to_string()))?;
        if let Some(s) = stats.as_deref_mut() {
            s.add_discovered(n);
        }
        discovered.push(n.clone());
    }

    for (_prefix, sub_nodes) in group_by_prefix(next_level) {
        recurse(sub_nodes, minsup, max_elts, sink, stats.as_deref_mut(), discovered)?;
    }
    Ok(())
}

/// Unconstrained dSPADE.
pub fn dspade(
    f1_nodes: &[Node],
    minsup: usize,
    sink: &mut dyn DiscoverySink,
    stats: Option<&mut StatsCounter>,
) -> Result<Vec<Node>, MiningError> {
    run(f1_nodes, minsup, None, sink, stats)
}

/// dSPADE with the `maxElts` cardinality constraint applied at every level.
pub fn maxelts_dspade(
    f1_nodes: &[Node],
    minsup: usize,
    max_elts: usize,
    sink: &mut dyn DiscoverySink,
    stats: Option<&mut StatsCounter>,
) -> Result<Vec<Node>, MiningError> {
    run(f1_nodes, minsup, Some(max_elts), sink, stats)
}
