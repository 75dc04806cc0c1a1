use std::collections::HashSet;

/// One occurrence of a pattern: the sequence it occurs in and the position
/// (within that sequence) of the pattern's last event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Tid {
    pub sid: u32,
    pub eid: u32,
}

impl Tid {
    pub fn new(sid: u32, eid: u32) -> Self {
        Self { sid, eid }
    }
}

/// Sorted, duplicate-free list of `Tid`s. Callers are responsible for
/// maintaining sortedness; `i_join`/`s_join` assume it and never re-sort.
pub type TidList = Vec<Tid>;

/// Support = number of distinct sids in a tid-list.
pub fn support(tidlist: &[Tid]) -> usize {
    if tidlist.is_empty() {
        return 0;
    }
    // Tids are sorted by (sid, eid), so distinct sids form contiguous runs;
    // a linear scan avoids building a hash set for the common case.
    let mut count = 1;
    for w in tidlist.windows(2) {
        if w[0].sid != w[1].sid {
            count += 1;
        }
    }
    count
}

/// I-join (E-join): same-event intersection on `(sid, eid)`.
/// `i_join(t1, t2) = sort(t1 ∩ t2)` (P1).
pub fn i_join(t1: &[Tid], t2: &[Tid]) -> TidList {
    let mut out = TidList::new();
    let (mut i, mut j) = (0, 0);
    while i < t1.len() && j < t2.len() {
        match t1[i].cmp(&t2[j]) {
            std::cmp::Ordering::Equal => {
                out.push(t1[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }
    out
}

/// S-join (temporal join): for every `(sid, eid2)` in `t2`, keep it iff some
/// `(sid, eid1)` in `t1` has `eid1 < eid2`. Strict inequality only (P1).
///
/// Streamed by sid block; only the minimum `eid1` per sid block is needed
/// since the comparison is `eid2 > min_eid1`.
pub fn s_join(t1: &[Tid], t2: &[Tid]) -> TidList {
    let mut out = TidList::new();
    let (mut i, mut j) = (0, 0);

    while i < t1.len() && j < t2.len() {
        let sid1 = t1[i].sid;
        let sid2 = t2[j].sid;

        if sid1 < sid2 {
            i += 1;
            continue;
        }
        if sid2 < sid1 {
            j += 1;
            continue;
        }

        let sid = sid1;
        let mut min_eid1 = t1[i].eid;
        i += 1;
        while i < t1.len() && t1[i].sid == sid {
            if t1[i].eid < min_eid1 {
                min_eid1 = t1[i].eid;
            }
            i += 1;
        }

        while j < t2.len() && t2[j].sid == sid {
            if t2[j].eid > min_eid1 {
                out.push(t2[j]);
            }
            j += 1;
        }
    }

    out
}

/// Defensive dedup-by-sid used only when ingesting F1 tid-lists, which may
/// contain more than one tid per sid before the final support step (see
/// spec.md §3, "Support" note).
pub fn dedup_by_sid(tidlist: &mut TidList) {
    let mut seen = HashSet::new();
    tidlist.retain(|t| seen.insert(t.sid));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i_join_intersects() {
        let t1 = vec![Tid::new(1, 10), Tid::new(1, 20), Tid::new(2, 10)];
        let t2 = vec![Tid::new(1, 20), Tid::new(2, 10), Tid::new(2, 15)];
        assert_eq!(i_join(&t1, &t2), vec![Tid::new(1, 20), Tid::new(2, 10)]);
    }

    #[test]
    fn s_join_is_strictly_after() {
        let t1 = vec![Tid::new(1, 10), Tid::new(1, 20), Tid::new(2, 5)];
        let t2 = vec![
            Tid::new(1, 10),
            Tid::new(1, 15),
            Tid::new(1, 25),
            Tid::new(2, 5),
            Tid::new(2, 6),
        ];
        assert_eq!(
            s_join(&t1, &t2),
            vec![Tid::new(1, 15), Tid::new(1, 25), Tid::new(2, 6)]
        );
    }

    #[test]
    fn support_counts_unique_sid() {
        let tidlist = vec![Tid::new(1, 10), Tid::new(1, 20), Tid::new(2, 15)];
        assert_eq!(support(&tidlist), 2);
    }

    #[test]
    fn s_join_empty_inputs() {
        assert_eq!(s_join(&[], &[Tid::new(1, 1)]), vec![]);
        assert_eq!(i_join(&[Tid::new(1, 1)], &[]), vec![]);
    }
}
