use std::fs;
use std::path::Path;

use crate::error::MiningError;
use crate::report::input_stats::InputStats;
use crate::stats::StatsCounter;

/// Parameters identifying which algorithm produced a STAT report.
pub struct RunMeta<'a> {
    pub alg: &'a str,
    pub sup: usize,
    pub max_elts: Option<usize>,
}

/// Wall-clock phase timings, in seconds.
pub struct Timings {
    pub time_read_s: f64,
    pub time_mine_s: f64,
    pub time_write_s: f64,
    pub total_time_s: f64,
}

fn fmt_float(x: f64) -> String {
    format!("{:.6}", x)
}

/// Writes the STAT key-value report spec.md §6 defines: input shape,
/// parameters, timings, max lengths, totals, and per-length histograms for
/// `k = 1..=max_discovered_length + 1`. Ported from
/// `original_source/spade/stat_file.py::write_stat`.
pub fn write(
    path: impl AsRef<Path>,
    input_stats: &InputStats,
    meta: &RunMeta,
    timings: &Timings,
    stats: &StatsCounter,
) -> Result<(), MiningError> {
    let total_minus_read = timings.total_time_s - timings.time_read_s;
    let mut lines = Vec::new();

    lines.push(format!("input_file: {}", input_stats.filename));
    lines.push(format!("num_sequences_D: {}", input_stats.num_sequences));
    lines.push(format!("num_transactions_T: {}", input_stats.num_transactions));
    lines.push(format!(
        "num_distinct_items_I: {}",
        input_stats.num_distinct_items
    ));

    lines.push(format!("tx_per_seq_min: {}", input_stats.min_tx_per_seq));
    lines.push(format!("tx_per_seq_max: {}", input_stats.max_tx_per_seq));
    lines.push(format!(
        "tx_per_seq_mean: {}",
        fmt_float(input_stats.mean_tx_per_seq)
    ));
    lines.push(format!(
        "tx_per_seq_std: {}",
        fmt_float(input_stats.std_tx_per_seq)
    ));

    lines.push(format!(
        "items_per_tx_min: {}",
        input_stats.min_items_per_tx
    ));
    lines.push(format!(
        "items_per_tx_max: {}",
        input_stats.max_items_per_tx
    ));
    lines.push(format!(
        "items_per_tx_mean: {}",
        fmt_float(input_stats.mean_items_per_tx)
    ));
    lines.push(format!(
        "items_per_tx_std: {}",
        fmt_float(input_stats.std_items_per_tx)
    ));

    lines.push(format!("alg: {}", meta.alg));
    lines.push(format!("sup: {}", meta.sup));
    if let Some(max_elts) = meta.max_elts {
        lines.push(format!("maxElts: {}", max_elts));
    }

    lines.push(format!("time_read_s: {}", fmt_float(timings.time_read_s)));
    lines.push(format!("time_mine_s: {}", fmt_float(timings.time_mine_s)));
    lines.push(format!("time_write_s: {}", fmt_float(timings.time_write_s)));
    lines.push(format!(
        "total_time_minus_read_s: {}",
        fmt_float(total_minus_read)
    ));
    lines.push(format!("total_time_s: {}", fmt_float(timings.total_time_s)));

    lines.push(format!(
        "max_candidate_length: {}",
        stats.max_candidate_length()
    ));
    lines.push(format!(
        "max_discovered_length: {}",
        stats.max_discovered_length()
    ));

    lines.push(format!("total_candidates: {}", stats.total_candidates()));
    lines.push(format!(
        "total_candidates_sum_sup: {}",
        stats.total_sum_sup_candidates()
    ));
    lines.push(format!(
        "total_candidates_sum_tidlist_len: {}",
        stats.total_sum_tid_candidates()
    ));

    lines.push(format!("total_discovered: {}", stats.total_discovered()));
    lines.push(format!(
        "total_discovered_sum_sup: {}",
        stats.total_sum_sup_discovered()
    ));
    lines.push(format!(
        "total_discovered_sum_tidlist_len: {}",
        stats.total_sum_tid_discovered()
    ));

    lines.push(format!(
        "total_attempted_candidates: {}",
        stats.total_attempted()
    ));
    lines.push(format!(
        "total_attempted_sum_tidlist_len: {}",
        stats.total_sum_tid_attempted()
    ));

    let max_len = stats.max_discovered_length();
    for k in 1..=(max_len + 1) {
        lines.push(format!("candidates_len_{}: {}", k, stats.candidates_at(k)));
        lines.push(format!(
            "candidates_len_{}_sum_sup: {}",
            k,
            stats.sum_sup_candidates_at(k)
        ));
        lines.push(format!(
            "candidates_len_{}_sum_tidlist_len: {}",
            k,
            stats.sum_tid_candidates_at(k)
        ));

        lines.push(format!("discovered_len_{}: {}", k, stats.discovered_at(k)));
        lines.push(format!(
            "discovered_len_{}_sum_sup: {}",
            k,
            stats.sum_sup_discovered_at(k)
        ));
        lines.push(format!(
            "discovered_len_{}_sum_tidlist_len: {}",
            k,
            stats.sum_tid_discovered_at(k)
        ));

        lines.push(format!("attempted_len_{}: {}", k, stats.attempted_at(k)));
        lines.push(format!(
            "attempted_len_{}_sum_tidlist_len: {}",
            k,
            stats.sum_tid_attempted_at(k)
        ));
    }

    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}
