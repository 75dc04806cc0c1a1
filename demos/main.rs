use spade_miner::{mine, pattern::format_pattern, Algorithm, CollectingSink, Record};

const DATA: &[(u32, u32, &[&str])] = &[
    (1, 1, &["A", "B"]),
    (1, 2, &["F"]),
    (2, 1, &["A"]),
    (2, 2, &["B", "D", "F"]),
    (3, 1, &["A", "B", "F"]),
    (4, 1, &["A", "B"]),
    (4, 2, &["D", "F"]),
];

fn main() {
    let records: Vec<Record> = DATA
        .iter()
        .map(|&(sid, eid, items)| {
            Record::new(sid, eid, items.iter().map(|s| s.to_string()).collect())
        })
        .collect();

    let mut sink = CollectingSink::default();
    mine(&records, 2, Algorithm::DSpade, &mut sink).expect("mining the toy dataset cannot fail");

    for node in &sink.nodes {
        println!(
            "{} support={} elts={}",
            format_pattern(node.pattern()),
            node.sup(),
            node.elts()
        );
    }
}
