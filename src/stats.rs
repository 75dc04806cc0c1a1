use crate::pattern::Node;

/// Per-length histograms over candidates, discoveries and join attempts.
/// Lengths are dense small integers, so each histogram is a plain `Vec`
/// indexed by `length - 1` rather than a map (spec.md §9 design note).
#[derive(Debug, Default, Clone)]
pub struct StatsCounter {
    candidates_by_len: Vec<u64>,
    discovered_by_len: Vec<u64>,
    attempted_by_len: Vec<u64>,

    sum_sup_candidates: Vec<u64>,
    sum_tid_candidates: Vec<u64>,
    sum_sup_discovered: Vec<u64>,
    sum_tid_discovered: Vec<u64>,
    sum_tid_attempted: Vec<u64>,

    max_candidate_length: usize,
    max_discovered_length: usize,
}

fn bump(v: &mut Vec<u64>, idx: usize, by: u64) {
    if v.len() <= idx {
        v.resize(idx + 1, 0);
    }
    v[idx] += by;
}

fn get(v: &[u64], idx: usize) -> u64 {
    v.get(idx).copied().unwrap_or(0)
}

impl StatsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a generated candidate, before the support filter is applied.
    pub fn add_attempted(&mut self, length: usize, tidlist_len: usize) {
        let idx = length - 1;
        bump(&mut self.attempted_by_len, idx, 1);
        bump(&mut self.sum_tid_attempted, idx, tidlist_len as u64);
    }

    /// Records a candidate that survived the support filter.
    pub fn add_candidate(&mut self, node: &Node) {
        let k = node.length();
        self.max_candidate_length = self.max_candidate_length.max(k);
        let idx = k - 1;
        bump(&mut self.candidates_by_len, idx, 1);
        bump(&mut self.sum_sup_candidates, idx, node.sup() as u64);
        bump(&mut self.sum_tid_candidates, idx, node.len_tidlist() as u64);
    }

    /// Records a node handed to the discovery sink.
    pub fn add_discovered(&mut self, node: &Node) {
        let k = node.length();
        self.max_discovered_length = self.max_discovered_length.max(k);
        let idx = k - 1;
        bump(&mut self.discovered_by_len, idx, 1);
        bump(&mut self.sum_sup_discovered, idx, node.sup() as u64);
        bump(&mut self.sum_tid_discovered, idx, node.len_tidlist() as u64);
    }

    pub fn candidates_at(&self, k: usize) -> u64 {
        get(&self.candidates_by_len, k - 1)
    }
    pub fn discovered_at(&self, k: usize) -> u64 {
        get(&self.discovered_by_len, k - 1)
    }
    pub fn attempted_at(&self, k: usize) -> u64 {
        get(&self.attempted_by_len, k - 1)
    }
    pub fn sum_sup_candidates_at(&self, k: usize) -> u64 {
        get(&self.sum_sup_candidates, k - 1)
    }
    pub fn sum_tid_candidates_at(&self, k: usize) -> u64 {
        get(&self.sum_tid_candidates, k - 1)
    }
    pub fn sum_sup_discovered_at(&self, k: usize) -> u64 {
        get(&self.sum_sup_discovered, k - 1)
    }
    pub fn sum_tid_discovered_at(&self, k: usize) -> u64 {
        get(&self.sum_tid_discovered, k - 1)
    }
    pub fn sum_tid_attempted_at(&self, k: usize) -> u64 {
        get(&self.sum_tid_attempted, k - 1)
    }

    pub fn max_candidate_length(&self) -> usize {
        self.max_candidate_length
    }
    pub fn max_discovered_length(&self) -> usize {
        self.max_discovered_length
    }

    pub fn total_candidates(&self) -> u64 {
        self.candidates_by_len.iter().sum()
    }
    pub fn total_discovered(&self) -> u64 {
        self.discovered_by_len.iter().sum()
    }
    pub fn total_attempted(&self) -> u64 {
        self.attempted_by_len.iter().sum()
    }
    pub fn total_sum_sup_candidates(&self) -> u64 {
        self.sum_sup_candidates.iter().sum()
    }
    pub fn total_sum_tid_candidates(&self) -> u64 {
        self.sum_tid_candidates.iter().sum()
    }
    pub fn total_sum_sup_discovered(&self) -> u64 {
        self.sum_sup_discovered.iter().sum()
    }
    pub fn total_sum_tid_discovered(&self) -> u64 {
        self.sum_tid_discovered.iter().sum()
    }
    pub fn total_sum_tid_attempted(&self) -> u64 {
        self.sum_tid_attempted.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tidlist::Tid;

    #[test]
    fn tracks_histograms_by_length() {
        let mut stats = StatsCounter::new();
        let node = Node::new(vec![vec!["A".to_string()]], vec![Tid::new(1, 1), Tid::new(2, 1)]);

        stats.add_attempted(1, 2);
        stats.add_candidate(&node);
        stats.add_discovered(&node);

        assert_eq!(stats.attempted_at(1), 1);
        assert_eq!(stats.candidates_at(1), 1);
        assert_eq!(stats.discovered_at(1), 1);
        assert_eq!(stats.sum_sup_discovered_at(1), 2);
        assert_eq!(stats.max_discovered_length(), 1);
    }
}
