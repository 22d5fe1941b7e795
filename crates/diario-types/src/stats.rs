use serde::{Deserialize, Serialize};

/// Category tallies over one result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub contratos: usize,
    pub pregoes: usize,
    pub aditamentos: usize,
    pub outros: usize,
    pub total: usize,
}

impl AggregateStats {
    /// Empty result sets have no stats panel.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
