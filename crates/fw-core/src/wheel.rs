//! Wheel model — ordered sequence of distinct segment labels

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{FwError, FwResult};
use crate::geometry;

/// A segmented wheel: N ≥ 1 distinct labels in fixed order.
///
/// Segment order never changes after construction; each segment spans an
/// angular width of 2π/N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheel {
    labels: Vec<String>,
}

impl Wheel {
    /// Create a wheel from an ordered label sequence.
    ///
    /// Fails on an empty sequence or duplicate labels.
    pub fn new(labels: Vec<String>) -> FwResult<Self> {
        if labels.is_empty() {
            return Err(FwError::InvalidWheel("no segments".into()));
        }
        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(FwError::InvalidWheel(format!(
                    "duplicate segment label {label:?}"
                )));
            }
        }
        Ok(Self { labels })
    }

    /// The classic numeric wheel: labels "1" through "n"
    pub fn numeric(n: usize) -> FwResult<Self> {
        Self::new((1..=n).map(|i| i.to_string()).collect())
    }

    /// Number of segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.labels.len()
    }

    /// Angular width of one segment in radians
    #[inline]
    pub fn segment_width(&self) -> f64 {
        geometry::segment_width(self.labels.len())
    }

    /// Segment labels in wheel order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of segment `index`, if in range
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of `label` on the wheel, if present
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Index of `label`, or the fatal contract violation if the draw service
    /// handed us a value that is not on the wheel.
    pub fn require_index(&self, label: &str) -> FwResult<usize> {
        self.index_of(label)
            .ok_or_else(|| FwError::InvalidWinningValue(label.to_string()))
    }
}
