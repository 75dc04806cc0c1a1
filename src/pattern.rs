use std::fmt;

use crate::tidlist::{support, Tid, TidList};

/// An opaque item token; ordered lexicographically on its textual form.
pub type Item = String;

/// A strictly increasing, duplicate-free sequence of items (canonical form
/// is sorted ascending; callers must maintain it).
pub type Event = Vec<Item>;

/// A non-empty sequence of events, `⟨E₁, E₂, …, Eₖ⟩`.
pub type Pattern = Vec<Event>;

/// Number of events in a pattern.
pub fn pattern_len(p: &Pattern) -> usize {
    p.len()
}

/// Total item count summed across all events of a pattern.
pub fn num_elts(p: &Pattern) -> usize {
    p.iter().map(|ev| ev.len()).sum()
}

/// Canonical `<{A B}->{C}->{D E}>` rendering, used both for OUT rows and as
/// the deterministic sort key (`pattern_sort_key`).
pub fn format_pattern(p: &Pattern) -> String {
    let parts: Vec<String> = p
        .iter()
        .map(|ev| format!("{{{}}}", ev.join(" ")))
        .collect();
    format!("<{}>", parts.join("->"))
}

/// Deterministic total order over patterns: the formatted string.
pub fn pattern_sort_key(p: &Pattern) -> String {
    format_pattern(p)
}

/// Last-step classification used to key equivalence classes (spec.md §4.4).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StepType {
    /// Last event has more than one item: extension grew the last event.
    I,
    /// Last event is a singleton: extension appended a new event.
    S,
}

/// Splits a pattern into `(prefix, step_type, atom)`.
///
/// Assumes canonical form: events are sorted, and an I-extension always
/// appends an item greater than the current last item of the last event, so
/// the added atom is always the last element of the last event.
pub fn split_last_step(p: &Pattern) -> (Pattern, StepType, Item) {
    let last_ev = p.last().expect("pattern is never empty");
    if last_ev.len() > 1 {
        let atom = last_ev.last().unwrap().clone();
        let mut prefix = p.clone();
        let last = prefix.last_mut().unwrap();
        last.pop();
        (prefix, StepType::I, atom)
    } else {
        let atom = last_ev[0].clone();
        let prefix = p[..p.len() - 1].to_vec();
        (prefix, StepType::S, atom)
    }
}

/// A `(Pattern, Tid-list)` pair. Immutable once constructed; `sup`, `elts`,
/// `length` and tid-list length are derived on demand (tid-lists are small
/// enough that caching isn't worth the invalidation hazard).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pattern: Pattern,
    tidlist: TidList,
}

impl Node {
    pub fn new(pattern: Pattern, tidlist: TidList) -> Self {
        Self { pattern, tidlist }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn tidlist(&self) -> &[Tid] {
        &self.tidlist
    }

    pub fn sup(&self) -> usize {
        support(&self.tidlist)
    }

    pub fn len_tidlist(&self) -> usize {
        self.tidlist.len()
    }

    pub fn length(&self) -> usize {
        pattern_len(&self.pattern)
    }

    pub fn elts(&self) -> usize {
        num_elts(&self.pattern)
    }

    pub fn into_parts(self) -> (Pattern, TidList) {
        (self.pattern, self.tidlist)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_pattern(&self.pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(items: &[&str]) -> Event {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn formats_pattern_canonically() {
        let p: Pattern = vec![ev(&["A", "B"]), ev(&["C"]), ev(&["D", "E"])];
        assert_eq!(format_pattern(&p), "<{A B}->{C}->{D E}>");
    }

    #[test]
    fn splits_i_step() {
        let p: Pattern = vec![ev(&["A"]), ev(&["B", "C"])];
        let (prefix, ty, atom) = split_last_step(&p);
        assert_eq!(ty, StepType::I);
        assert_eq!(atom, "C");
        assert_eq!(prefix, vec![ev(&["A"]), ev(&["B"])]);
    }

    #[test]
    fn splits_s_step() {
        let p: Pattern = vec![ev(&["A"]), ev(&["B"])];
        let (prefix, ty, atom) = split_last_step(&p);
        assert_eq!(ty, StepType::S);
        assert_eq!(atom, "B");
        assert_eq!(prefix, vec![ev(&["A"])]);
    }

    #[test]
    fn length_one_pattern_has_empty_prefix() {
        let p: Pattern = vec![ev(&["A"])];
        let (prefix, ty, atom) = split_last_step(&p);
        assert_eq!(ty, StepType::S);
        assert_eq!(atom, "A");
        assert!(prefix.is_empty());
    }

    #[test]
    fn elts_and_length() {
        let p: Pattern = vec![ev(&["A", "B"]), ev(&["C"])];
        assert_eq!(pattern_len(&p), 2);
        assert_eq!(num_elts(&p), 3);
    }
}
