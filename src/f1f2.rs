use crate::pattern::{Item, Pattern};
use crate::stats::StatsCounter;
use crate::tidlist::{i_join, s_join, support, TidList};
use crate::vertical::VerticalDb;

/// One frequent 1-pattern: item, its tid-list, and its support.
pub type F1Entry = (Item, TidList, usize);

/// F1: frequent single items, in item order (spec.md §4.3).
///
/// `max_elts`, when set, additionally requires `elts <= max_elts` for a
/// length-1 pattern — only relevant when `max_elts == 0`, since every
/// single item already has `elts == 1`.
pub fn frequent_items(vdb: &VerticalDb, minsup: usize, max_elts: Option<usize>) -> Vec<F1Entry> {
    let mut out = Vec::new();
    for (item, tidlist) in vdb.iter() {
        if let Some(cap) = max_elts {
            if 1 > cap {
                continue;
            }
        }
        let sup = support(tidlist);
        if sup >= minsup {
            out.push((item.clone(), tidlist.clone(), sup));
        }
    }
    out
}

/// One frequent 2-pattern: pattern, tid-list, support.
pub type F2Entry = (Pattern, TidList, usize);

/// F2: frequent length-2 patterns (spec.md §4.3). The I-step is enumerated
/// in full before any S-step output; within each step, output is
/// lexicographic on `(x, y)`.
///
/// Every generated candidate is recorded as attempted (before the minsup
/// check). When `max_elts` is set, a candidate whose `elts` exceeds it is
/// discarded before being recorded as attempted at all — matching the
/// `join_in_class` policy so maxElts filtering is applied consistently
/// across the whole pipeline (see SPEC_FULL.md §10).
pub fn gen_f2(
    f1: &[F1Entry],
    minsup: usize,
    max_elts: Option<usize>,
    mut stats: Option<&mut StatsCounter>,
) -> Vec<F2Entry> {
    let items: Vec<&Item> = f1.iter().map(|(it, _, _)| it).collect();
    let tid: Vec<&TidList> = f1.iter().map(|(_, tl, _)| tl).collect();

    let mut out = Vec::new();

    // I-step: <{x, y}>, one event with two items => elts = 2.
    if max_elts.is_none_or(|cap| 2 <= cap) {
        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                let tl = i_join(tid[i], tid[j]);
                if let Some(s) = stats.as_deref_mut() {
                    s.add_attempted(1, tl.len());
                }
                let sup = support(&tl);
                if sup >= minsup {
                    let pat: Pattern = vec![vec![items[i].clone(), items[j].clone()]];
                    out.push((pat, tl, sup));
                }
            }
        }
    }

    // S-step: <{x}->{y}>, two singleton events => elts = 2.
    if max_elts.is_none_or(|cap| 2 <= cap) {
        for i in 0..items.len() {
            for j in 0..items.len() {
                let tl = s_join(tid[i], tid[j]);
                if let Some(s) = stats.as_deref_mut() {
                    s.add_attempted(2, tl.len());
                }
                let sup = support(&tl);
                if sup >= minsup {
                    let pat: Pattern = vec![vec![items[i].clone()], vec![items[j].clone()]];
                    out.push((pat, tl, sup));
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertical::{Record, VerticalDb};

    fn rec(sid: u32, eid: u32, items: &[&str]) -> Record {
        Record::new(sid, eid, items.iter().map(|s| s.to_string()).collect())
    }

    // Scenario C (spec.md §8): A, B, F appear in all 4 sequences, D in 2.
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
    fn f1_toy_sup2() {
        let records = toy_records();
        let vdb = VerticalDb::build(&records).unwrap();
        let f1 = frequent_items(&vdb, 2, None);
        let got: Vec<(String, usize)> = f1.into_iter().map(|(it, _, s)| (it, s)).collect();
        assert_eq!(
            got,
            vec![
                ("A".to_string(), 4),
                ("B".to_string(), 4),
                ("D".to_string(), 2),
                ("F".to_string(), 4),
            ]
        );
    }

    #[test]
    fn f2_i_step_before_s_step() {
        let records = toy_records();
        let vdb = VerticalDb::build(&records).unwrap();
        let f1 = frequent_items(&vdb, 2, None);
        let f2 = gen_f2(&f1, 2, None, None);

        // First outputs must be one-event (I-step) patterns.
        let first_kind_is_i_step = f2.iter().take_while(|(p, _, _)| p.len() == 1).count();
        assert!(first_kind_is_i_step > 0);
        assert!(f2.iter().any(|(p, _, _)| p.len() == 2));
    }
}
