//! Hooks for watching an analysis run without changing its outcome.

use crate::alphabet::ALPHABET_SIZE;
use crate::ic::KeyLengthResult;
use crate::key::Key;
use itertools::Itertools;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_observer_flushes_full_rows() {
        let mut observer = TracingObserver::default();
        for shift in 0..ALPHABET_SIZE as u8 {
            observer.shift_candidate(0, shift, 0.04);
        }
        assert!(observer.scores.is_empty());

        observer.shift_candidate(1, 0, 0.05);
        assert_eq!(observer.scores, vec![0.05]);
    }
}

pub trait Observer {
    fn key_length_candidate(&mut self, _key_length: usize, _ic: f64) {}

    fn key_length_result(&mut self, _result: &KeyLengthResult) {}

    fn shift_candidate(&mut self, _position: usize, _shift: u8, _mic: f64) {}

    fn key_found(&mut self, _key: &Key) {}
}

impl Observer for () {}

/// Emits every hook as a `tracing` event.
#[derive(Default)]
pub struct TracingObserver {
    scores: Vec<f64>,
}

impl Observer for TracingObserver {
    fn key_length_candidate(&mut self, key_length: usize, ic: f64) {
        tracing::debug!("IC for key length {} is: {:.5}", key_length, ic);
    }

    fn key_length_result(&mut self, result: &KeyLengthResult) {
        match result {
            KeyLengthResult::Found(key_length) => {
                tracing::info!("Found the key length: {}", key_length)
            }
            KeyLengthResult::Exhausted(bound) => tracing::warn!(
                "No key length up to {} reached the English IC, using {}",
                bound,
                bound
            ),
        }
    }

    fn shift_candidate(&mut self, position: usize, shift: u8, mic: f64) {
        tracing::trace!("Key {} shift {}: {:.5}", position, shift, mic);
        self.scores.push(mic);

        if self.scores.len() == ALPHABET_SIZE {
            tracing::debug!(
                "Key {} MIC by shift: [{}]",
                position,
                self.scores.iter().map(|s| format!("{:.4}", s)).join(" ")
            );
            self.scores.clear();
        }
    }

    fn key_found(&mut self, key: &Key) {
        tracing::info!("Found the key: {}", key);
    }
}
