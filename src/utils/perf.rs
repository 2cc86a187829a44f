//! Performance measurement utilities
//!
//! This module provides timing helpers for the table editor. The API
//! layer measures each exported operation and records it here; the
//! state dump and tests read the aggregates back.

use std::collections::HashMap;

/// Samples kept per operation; older ones are dropped
const MAX_SAMPLES_PER_OP: usize = 100;

/// Performance monitor for measuring operation times
pub struct PerformanceMonitor {
    measurements: HashMap<String, Vec<f32>>,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self {
            measurements: HashMap::new(),
        }
    }

    pub fn record_measurement(&mut self, operation: &str, duration_ms: f32) {
        let samples = self
            .measurements
            .entry(operation.to_string())
            .or_insert_with(Vec::new);
        if samples.len() == MAX_SAMPLES_PER_OP {
            samples.remove(0);
        }
        samples.push(duration_ms);
    }

    pub fn get_average_time(&self, operation: &str) -> Option<f32> {
        self.measurements.get(operation).map(|times| {
            if times.is_empty() {
                0.0
            } else {
                times.iter().sum::<f32>() / times.len() as f32
            }
        })
    }

    pub fn measurement_count(&self, operation: &str) -> usize {
        self.measurements
            .get(operation)
            .map(|times| times.len())
            .unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.measurements.clear();
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_over_samples() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_measurement("render", 10.0);
        monitor.record_measurement("render", 20.0);
        assert_eq!(monitor.get_average_time("render"), Some(15.0));
        assert_eq!(monitor.get_average_time("missing"), None);
        assert_eq!(monitor.measurement_count("render"), 2);
    }

    #[test]
    fn test_sample_cap_drops_oldest() {
        let mut monitor = PerformanceMonitor::new();
        for i in 0..(MAX_SAMPLES_PER_OP + 10) {
            monitor.record_measurement("resize", i as f32);
        }
        assert_eq!(monitor.measurement_count("resize"), MAX_SAMPLES_PER_OP);
        // First ten samples were evicted
        let average = monitor.get_average_time("resize").unwrap();
        assert!(average > 10.0);
    }
}
