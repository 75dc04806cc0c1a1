use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::MiningError;
use crate::pattern::Item;
use crate::tidlist::{Tid, TidList};

/// One input row: a sequence id, the position of this event within that
/// sequence, and the (sorted, duplicate-free) items occurring in it.
#[derive(Clone, Debug)]
pub struct Record {
    pub sid: u32,
    pub eid: u32,
    pub items: Vec<Item>,
}

impl Record {
    pub fn new(sid: u32, eid: u32, items: Vec<Item>) -> Self {
        Self { sid, eid, items }
    }
}

/// Validates the ingestion invariants spec.md §7 requires: non-empty item
/// sets, duplicate-free events, and strictly increasing eids per sid.
/// Records are expected to already be sorted by `(sid, eid)`.
pub fn validate(records: &[Record]) -> Result<(), MiningError> {
    if records.is_empty() {
        return Err(MiningError::EmptyInput);
    }

    let mut last_eid_by_sid: BTreeMap<u32, u32> = BTreeMap::new();
    for r in records {
        if r.items.is_empty() {
            return Err(MiningError::MalformedRecord {
                sid: r.sid,
                eid: r.eid,
                reason: "empty item set",
            });
        }

        let unique: HashSet<&Item> = r.items.iter().collect();
        if unique.len() != r.items.len() {
            return Err(MiningError::MalformedRecord {
                sid: r.sid,
                eid: r.eid,
                reason: "duplicate items in event",
            });
        }

        if let Some(&prev_eid) = last_eid_by_sid.get(&r.sid) {
            if r.eid <= prev_eid {
                return Err(MiningError::MalformedRecord {
                    sid: r.sid,
                    eid: r.eid,
                    reason: "eid not strictly increasing within sid",
                });
            }
        }
        last_eid_by_sid.insert(r.sid, r.eid);
    }

    Ok(())
}

/// Maps each item to the sorted tid-list of every `(sid, eid)` where it
/// occurs. Built once, read-only thereafter.
#[derive(Clone, Debug, Default)]
pub struct VerticalDb {
    map: BTreeMap<Item, TidList>,
}

impl VerticalDb {
    /// Inverts validated records into a vertical database. Iteration order
    /// over items (`items()`) is lexicographic, matching spec.md §4.2.
    pub fn build(records: &[Record]) -> Result<Self, MiningError> {
        validate(records)?;

        let mut map: BTreeMap<Item, TidList> = BTreeMap::new();
        for r in records {
            for item in &r.items {
                map.entry(item.clone())
                    .or_default()
                    .push(Tid::new(r.sid, r.eid));
            }
        }
        for tidlist in map.values_mut() {
            tidlist.sort();
        }

        debug!(
            num_records = records.len(),
            num_items = map.len(),
            "built vertical database"
        );

        Ok(Self { map })
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.map.keys()
    }

    pub fn tidlist(&self, item: &str) -> Option<&[Tid]> {
        self.map.get(item).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Item, &TidList)> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(sid: u32, eid: u32, items: &[&str]) -> Record {
        Record::new(sid, eid, items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn builds_sorted_tidlists() {
        let records = vec![
            rec(1, 1, &["A", "B"]),
            rec(1, 2, &["A"]),
            rec(2, 1, &["A"]),
        ];
        let vdb = VerticalDb::build(&records).unwrap();
        assert_eq!(
            vdb.tidlist("A").unwrap(),
            &[Tid::new(1, 1), Tid::new(1, 2), Tid::new(2, 1)]
        );
        assert_eq!(vdb.tidlist("B").unwrap(), &[Tid::new(1, 1)]);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            VerticalDb::build(&[]),
            Err(MiningError::EmptyInput)
        ));
    }

    #[test]
    fn rejects_non_increasing_eid() {
        let records = vec![rec(1, 2, &["A"]), rec(1, 1, &["B"])];
        assert!(matches!(
            VerticalDb::build(&records),
            Err(MiningError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn rejects_empty_item_set() {
        let records = vec![rec(1, 1, &[])];
        assert!(matches!(
            VerticalDb::build(&records),
            Err(MiningError::MalformedRecord { .. })
        ));
    }
}
