//! Level thresholds

use serde::{Deserialize, Serialize};

/// Cumulative xp thresholds indexed by level
///
/// Entry L is the xp needed to advance from level L to L+1. Levels past the
/// end of the table never advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionTable {
    thresholds: Vec<u32>,
}

impl ProgressionTable {
    pub fn new(thresholds: Vec<u32>) -> Self {
        Self { thresholds }
    }

    pub fn threshold_for(&self, level: u32) -> Option<u32> {
        let index = usize::try_from(level).ok()?;
        self.thresholds.get(index).copied()
    }

    /// Highest level reachable through this table
    pub fn max_level(&self) -> u32 {
        u32::try_from(self.thresholds.len()).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for ProgressionTable {
    fn default() -> Self {
        Self::new(vec![0, 50, 120, 220, 360])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_indexed_by_level() {
        let table = ProgressionTable::default();
        assert_eq!(table.threshold_for(1), Some(50));
        assert_eq!(table.threshold_for(4), Some(360));
        assert_eq!(table.threshold_for(5), None);
    }

    #[test]
    fn test_max_level() {
        assert_eq!(ProgressionTable::default().max_level(), 5);
        assert_eq!(ProgressionTable::new(vec![]).max_level(), 1);
    }
}
