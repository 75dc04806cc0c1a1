use std::path::Path;

use crate::error::MiningError;
use crate::vertical::{validate, Record};

#[derive(serde::Deserialize)]
struct Row {
    sid: u32,
    eid: u32,
    items: String,
}

/// Reads the `sid,eid,items` CSV schema (`items` space-separated) into
/// validated, `(sid, eid)`-sorted `Record`s.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Record>, MiningError> {
    let mut reader = ::csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize::<Row>() {
        let row = row?;
        let mut items: Vec<String> = row.items.split_whitespace().map(|s| s.to_string()).collect();
        if items.is_empty() {
            return Err(MiningError::MalformedRecord {
                sid: row.sid,
                eid: row.eid,
                reason: "empty items field",
            });
        }
        items.sort();
        records.push(Record::new(row.sid, row.eid, items));
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
    fn reads_and_validates_toy_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sid,eid,items").unwrap();
        writeln!(file, "1,1,A B").unwrap();
        writeln!(file, "1,2,F").unwrap();
        writeln!(file, "2,1,A").unwrap();

        let records = read(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].items, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn rejects_duplicate_items_in_a_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sid,eid,items").unwrap();
        writeln!(file, "1,1,A A").unwrap();

        assert!(matches!(
            read(file.path()),
            Err(MiningError::MalformedRecord { .. })
        ));
    }
}
