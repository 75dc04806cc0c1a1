use crate::error::MiningError;
use crate::pattern::Node;

/// Single-method contract for discovery delivery. Invoked exactly once per
/// discovered pattern, in the enumerator's emission order (spec.md §4.8).
/// The sink is free to serialize, count, or discard the node; returning an
/// error aborts the mining call, and whatever the sink already recorded is
/// left intact (spec.md §7 "Sink failure").
pub trait DiscoverySink {
    fn on_discover(&mut self, node: &Node) -> Result<(), MiningError>;
}

/// Sink that simply collects every discovered node, in order. Used by tests
/// and by callers that want the full result set in memory rather than
/// streaming it.
#[derive(Default)]
pub struct CollectingSink {
    pub nodes: Vec<Node>,
}

impl DiscoverySink for CollectingSink {
    fn on_discover(&mut self, node: &Node) -> Result<(), MiningError> {
        self.nodes.push(node.clone());
        Ok(())
    }
}

impl<F> DiscoverySink for F
where
    F: FnMut(&Node) -> Result<(), MiningError>,
{
    fn on_discover(&mut self, node: &Node) -> Result<(), MiningError> {
        self(node)
    }
}
