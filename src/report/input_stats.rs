use std::collections::{HashMap, HashSet};

use crate::error::MiningError;
use crate::vertical::Record;

/// Dataset-shape statistics reported in the STAT file: D (sequences), T
/// (transactions/events), I (distinct items), and the distribution of
/// transactions-per-sequence and items-per-transaction. Ported from
/// `original_source/spade/stats.py::compute_input_stats`.
#[derive(Debug, Clone)]
pub struct InputStats {
    pub filename: String,
    pub num_sequences: usize,
    pub num_transactions: usize,
    pub num_distinct_items: usize,

    pub min_tx_per_seq: usize,
    pub max_tx_per_seq: usize,
    pub mean_tx_per_seq: f64,
    pub std_tx_per_seq: f64,

    pub min_items_per_tx: usize,
    pub max_items_per_tx: usize,
    pub mean_items_per_tx: f64,
    pub std_items_per_tx: f64,
}

fn mean(values: &[usize]) -> f64 {
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

/// Population standard deviation (ddof=0), matching Python's
/// `statistics.pstdev` used by the original source.
fn pstdev(values: &[usize]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values
        .iter()
        .map(|&v| {
            let d = v as f64 - m;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    var.sqrt()
}

pub fn compute(records: &[Record], filename: &str) -> Result<InputStats, MiningError> {
    if records.is_empty() {
        return Err(MiningError::EmptyInput);
    }

    let mut sids: HashSet<u32> = HashSet::new();
    let mut all_items: HashSet<&str> = HashSet::new();
    let mut tx_per_sid: HashMap<u32, usize> = HashMap::new();
    let mut items_per_tx: Vec<usize> = Vec::with_capacity(records.len());

    for r in records {
        sids.insert(r.sid);
        *tx_per_sid.entry(r.sid).or_insert(0) += 1;
        items_per_tx.push(r.items.len());
        all_items.extend(r.items.iter().map(|s| s.as_str()));
    }

    let tx_counts: Vec<usize> = tx_per_sid.values().copied().collect();

    Ok(InputStats {
        filename: filename.to_string(),
        num_sequences: sids.len(),
        num_transactions: records.len(),
        num_distinct_items: all_items.len(),

        min_tx_per_seq: *tx_counts.iter().min().unwrap(),
        max_tx_per_seq: *tx_counts.iter().max().unwrap(),
        mean_tx_per_seq: mean(&tx_counts),
        std_tx_per_seq: pstdev(&tx_counts),

        min_items_per_tx: *items_per_tx.iter().min().unwrap(),
        max_items_per_tx: *items_per_tx.iter().max().unwrap(),
        mean_items_per_tx: mean(&items_per_tx),
        std_items_per_tx: pstdev(&items_per_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(sid: u32, eid: u32, items: &[&str]) -> Record {
        Record::new(sid, eid, items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn computes_shape_stats() {
        let records = vec![
            rec(1, 1, &["A", "B"]),
            rec(1, 2, &["A"]),
            rec(2, 1, &["A"]),
        ];
        let stats = compute(&records, "toy").unwrap();
        assert_eq!(stats.num_sequences, 2);
        assert_eq!(stats.num_transactions, 3);
        assert_eq!(stats.num_distinct_items, 2);
        assert_eq!(stats.min_tx_per_seq, 1);
        assert_eq!(stats.max_tx_per_seq, 2);
    }
}
