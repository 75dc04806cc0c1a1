use std::fs::File;
use std::path::Path;

use crate::error::MiningError;
use crate::pattern::{format_pattern, Node};
use crate::sink::DiscoverySink;

/// `DiscoverySink` that writes the OUT CSV spec.md §6 defines:
/// `pattern_len,num_elts,tidlist_len,sup,pattern`, one row per discovery in
/// emission order.
pub struct OutFileSink {
    writer: ::csv::Writer<File>,
}

impl OutFileSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, MiningError> {
        let mut writer = ::csv::WriterBuilder::new().from_path(path)?;
        writer.write_record(["pattern_len", "num_elts", "tidlist_len", "sup", "pattern"])?;
        Ok(Self { writer })
    }

    pub fn finish(mut self) -> Result<(), MiningError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl DiscoverySink for OutFileSink {
    fn on_discover(&mut self, node: &Node) -> Result<(), MiningError> {
        self.writer.write_record([
            node.length().to_string(),
            node.elts().to_string(),
            node.len_tidlist().to_string(),
            node.sup().to_string(),
            format_pattern(node.pattern()),
        ])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tidlist::Tid;

    #[test]
    fn writes_out_rows() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut sink = OutFileSink::create(file.path()).unwrap();
        let node = Node::new(vec![vec!["A".to_string()]], vec![Tid::new(1, 1), Tid::new(2, 1)]);
        sink.on_discover(&node).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("pattern_len,num_elts,tidlist_len,sup,pattern\n"));
        assert!(contents.contains("1,1,2,2,<{A}>"));
    }
}
