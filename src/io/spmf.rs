use std::fs;
use std::path::Path;

use crate::error::MiningError;
use crate::vertical::{validate, Record};

/// Reads the SPMF sequential format: whitespace-separated item tokens, `-1`
/// ends an event, `-2` ends a sequence. Each line becomes one sid. Ported
/// from `original_source/spade/io.py::read_spmf`.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Record>, MiningError> {
    let text = fs::read_to_string(path)?;
    let mut records = Vec::new();
    let mut sid: u32 = 1;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut current_event: Vec<String> = Vec::new();
        let mut eid: u32 = 1;
        let mut had_any = false;

        for tok in line.split_whitespace() {
            match tok {
                "-1" => {
                    if !current_event.is_empty() {
                        current_event.sort();
                        records.push(Record::new(sid, eid, std::mem::take(&mut current_event)));
                        eid += 1;
                        had_any = true;
                    }
                }
                "-2" => {
                    if !current_event.is_empty() {
                        current_event.sort();
                        records.push(Record::new(sid, eid, std::mem::take(&mut current_event)));
                        had_any = true;
                    }
                    if had_any {
                        sid += 1;
                    }
                    eid = 1;
                    had_any = false;
                }
                item => {
                    current_event.push(item.to_string());
                }
            }
        }
    }

    records.sort_by_key(|r| (r.sid, r.eid));
    validate(&records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_event_and_sequence_terminators() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A B -1 C -1 -2").unwrap();
        writeln!(file, "A -1 C -1 -2").unwrap();

        let records = read(file.path()).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].sid, 1);
        assert_eq!(records[0].items, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(records[2].sid, 2);
    }

    #[test]
    fn rejects_duplicate_items_in_an_event() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A A -1 -2").unwrap();

        assert!(matches!(
            read(file.path()),
            Err(MiningError::MalformedRecord { .. })
        ));
    }
}
