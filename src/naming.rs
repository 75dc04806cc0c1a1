use std::path::Path;

use crate::report::input_stats::InputStats;

/// Builds the `OUT_<alg>_<fname>_d<D>_t<T>_i<I>_s<sup>[_e<maxElts>].txt`
/// filename the original driver scripts used (`naming.py::build_out_name`).
pub fn out_file_name(alg: &str, info: &InputStats, sup: usize, max_elts: Option<usize>) -> String {
    build_name("OUT", alg, info, sup, max_elts)
}

/// Builds the matching `STAT_...` filename.
pub fn stat_file_name(alg: &str, info: &InputStats, sup: usize, max_elts: Option<usize>) -> String {
    build_name("STAT", alg, info, sup, max_elts)
}

fn build_name(prefix: &str, alg: &str, info: &InputStats, sup: usize, max_elts: Option<usize>) -> String {
    let mut base = format!(
        "{prefix}_{alg}_{fname}_d{d}_t{t}_i{i}_s{sup}",
        fname = info.filename,
        d = info.num_sequences,
        t = info.num_transactions,
        i = info.num_distinct_items,
    );
    if let Some(e) = max_elts {
        base.push_str(&format!("_e{e}"));
    }
    base.push_str(".txt");
    base
}

/// File stem of the input path, used as the `fname` naming component.
pub fn file_stem(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> InputStats {
        InputStats {
            filename: "toy".to_string(),
            num_sequences: 4,
            num_transactions: 7,
            num_distinct_items: 4,
            min_tx_per_seq: 1,
            max_tx_per_seq: 2,
            mean_tx_per_seq: 1.5,
            std_tx_per_seq: 0.5,
            min_items_per_tx: 1,
            max_items_per_tx: 3,
            mean_items_per_tx: 2.0,
            std_items_per_tx: 0.5,
        }
    }

    #[test]
    fn builds_out_and_stat_names() {
        assert_eq!(
            out_file_name("dspade", &info(), 2, None),
            "OUT_dspade_toy_d4_t7_i4_s2.txt"
        );
        assert_eq!(
            stat_file_name("maxelts-dspade", &info(), 2, Some(3)),
            "STAT_maxelts-dspade_toy_d4_t7_i4_s2_e3.txt"
        );
    }
}
