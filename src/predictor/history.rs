//! Ordered record of successful predictions

use chrono::{DateTime, Utc};

use crate::models::Memory;

/// Append-only list of memories plus the running prediction counter.
///
/// The counter is the index of the last recorded memory, so indices stay
/// dense from 1 until [`History::clear`] resets both.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Memory>,
    counter: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prediction stamped with the current time
    pub fn record(&mut self, sequence: &[f64], next_number: f64, common_difference: f64) -> &Memory {
        self.record_at(sequence, next_number, common_difference, Utc::now())
    }

    pub fn record_at(
        &mut self,
        sequence: &[f64],
        next_number: f64,
        common_difference: f64,
        timestamp: DateTime<Utc>,
    ) -> &Memory {
        self.counter += 1;
        self.entries.push(Memory {
            sequence: sequence.to_vec(),
            next_number,
            common_difference,
            timestamp,
            index: self.counter,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// All memories, oldest first
    pub fn entries(&self) -> &[Memory] {
        &self.entries
    }

    pub fn count(&self) -> u64 {
        self.counter
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense_from_one() {
        let mut history = History::new();
        for i in 0..5 {
            let memory = history.record(&[1.0, 2.0], 3.0 + i as f64, 1.0);
            assert_eq!(memory.index, i + 1);
        }
        let indices: Vec<u64> = history.entries().iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert_eq!(history.count(), 5);
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut history = History::new();
        history.record(&[1.0, 2.0], 3.0, 1.0);
        history.record(&[1.0, 2.0], 3.0, 1.0);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.count(), 0);
        assert_eq!(history.record(&[5.0, 10.0], 15.0, 5.0).index, 1);
    }

    #[test]
    fn test_record_copies_sequence() {
        let mut history = History::new();
        let mut input = vec![2.0, 4.0];
        history.record(&input, 6.0, 2.0);
        input.push(99.0);
        assert_eq!(history.entries()[0].sequence, vec![2.0, 4.0]);
    }

    #[test]
    fn test_record_at_keeps_timestamp() {
        let mut history = History::new();
        let ts = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let memory = history.record_at(&[1.0, 1.0], 1.0, 0.0, ts);
        assert_eq!(memory.timestamp, ts);
    }
}
