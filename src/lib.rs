//! Sequential pattern mining engine implementing the SPADE family of
//! algorithms: vertical tid-lists, the I-join/S-join primitives, F1/F2
//! generation, equivalence-class candidate joining, and the dSPADE/bSPADE
//! enumerators (with an optional `maxElts` cardinality cap).

pub mod candidates;
pub mod enumerate;
pub mod error;
pub mod f1f2;
pub mod io;
pub mod naming;
pub mod pattern;
pub mod report;
pub mod sink;
pub mod stats;
pub mod tidlist;
pub mod vertical;

pub use enumerate::bspade::{bspade, maxelts_bspade};
pub use enumerate::dspade::{dspade, maxelts_dspade};
pub use error::MiningError;
pub use pattern::{Event, Item, Node, Pattern};
pub use sink::{CollectingSink, DiscoverySink};
pub use stats::StatsCounter;
pub use tidlist::{Tid, TidList};
pub use vertical::{Record, VerticalDb};

use f1f2::frequent_items;

/// Selects which of the four enumerator variants `mine` should run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    DSpade,
    BSpade,
    MaxEltsDSpade { max_elts: usize },
    MaxEltsBSpade { max_elts: usize },
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::DSpade => "dspade",
            Algorithm::BSpade => "bspade",
            Algorithm::MaxEltsDSpade { .. } => "maxelts-dspade",
            Algorithm::MaxEltsBSpade { .. } => "maxelts-bspade",
        }
    }

    pub fn max_elts(&self) -> Option<usize> {
        match self {
            Algorithm::MaxEltsDSpade { max_elts } | Algorithm::MaxEltsBSpade { max_elts } => {
                Some(*max_elts)
            }
            _ => None,
        }
    }
}

/// Top-level entry point: builds the vertical database, computes F1, and
/// runs the chosen enumerator, delivering every discovered pattern to
/// `sink`. Returns the populated `StatsCounter` for STAT reporting.
///
/// `minsup < 1`, or a missing `maxElts` for a maxElts variant, are caller
/// bugs and validated up front per spec.md §7.
pub fn mine(
    records: &[Record],
    minsup: usize,
    algorithm: Algorithm,
    sink: &mut dyn DiscoverySink,
) -> Result<StatsCounter, MiningError> {
    if minsup < 1 {
        return Err(MiningError::InvalidMinSupport(minsup as i64));
    }
    if let Some(max_elts) = algorithm.max_elts() {
        if max_elts < 1 {
            return Err(MiningError::InvalidMaxElts(max_elts as i64));
        }
    }

    let vdb = VerticalDb::build(records)?;
    let f1 = frequent_items(&vdb, minsup, algorithm.max_elts());
    let f1_nodes: Vec<Node> = f1
        .into_iter()
        .map(|(item, tl, _sup)| Node::new(vec![vec![item]], tl))
        .collect();

    let mut stats = StatsCounter::new();
    match algorithm {
        Algorithm::DSpade => {
            dspade(&f1_nodes, minsup, sink, Some(&mut stats))?;
        }
        Algorithm::BSpade => {
            bspade(&f1_nodes, minsup, sink, Some(&mut stats))?;
        }
        Algorithm::MaxEltsDSpade { max_elts } => {
            maxelts_dspade(&f1_nodes, minsup, max_elts, sink, Some(&mut stats))?;
        }
        Algorithm::MaxEltsBSpade { max_elts } => {
            maxelts_bspade(&f1_nodes, minsup, max_elts, sink, Some(&mut stats))?;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(sid: u32, eid: u32, items: &[&str]) -> Record {
        Record::new(sid, eid, items.iter().map(|s| s.to_string()).collect())
    }

    fn toy_records() -> Vec<Record> {
        vec![
            rec(1, 1, &["A", "B"]),
            rec(1, 2, &["F"]),
            rec(2, 1, &["A"]),
            rec(2, 2, &["B", "D", "F"]),
            rec(3, 1, &["A", "B", "F"]),
            rec(4, 1, &["A", "B"]),
            rec(4, 2, &["D", "F"]),
        ]
    }

    #[test]
    fn rejects_invalid_minsup() {
        let records = toy_records();
        let mut sink = CollectingSink::default();
        let err = mine(&records, 0, Algorithm::DSpade, &mut sink).unwrap_err();
        assert!(matches!(err, MiningError::InvalidMinSupport(0)));
    }

    #[test]
    fn rejects_invalid_max_elts() {
        let records = toy_records();
        let mut sink = CollectingSink::default();
        let err = mine(
            &records,
            2,
            Algorithm::MaxEltsDSpade { max_elts: 0 },
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, MiningError::InvalidMaxElts(0)));
    }

    #[test]
    fn dspade_and_bspade_agree_on_toy_data() {
        let records = toy_records();

        let mut dsink = CollectingSink::default();
        mine(&records, 2, Algorithm::DSpade, &mut dsink).unwrap();

        let mut bsink = CollectingSink::default();
        mine(&records, 2, Algorithm::BSpade, &mut bsink).unwrap();

        let d: std::collections::HashSet<Pattern> =
            dsink.nodes.iter().map(|n| n.pattern().clone()).collect();
        let b: std::collections::HashSet<Pattern> =
            bsink.nodes.iter().map(|n| n.pattern().clone()).collect();
        assert_eq!(d, b);
        assert!(!d.is_empty());
    }
}
