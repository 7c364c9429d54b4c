//! Tolerance-banded duration clustering
//!
//! Single pass over the sorted durations: each value joins the current
//! cluster when it lies within `tolerance` (relative) of the cluster's running
//! mean, otherwise it opens a new cluster. Boundaries stay in physical units
//! and no bin count has to be chosen up front.

use crate::types::Cluster;

/// Default relative tolerance (15%)
pub const DEFAULT_CLUSTER_TOLERANCE: f64 = 0.15;

/// Running state of the cluster being built
#[derive(Debug, Clone, Copy)]
struct OpenCluster {
    sum: f64,
    count: usize,
}

impl OpenCluster {
    fn start(value: f64) -> Self {
        Self {
            sum: value,
            count: 1,
        }
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn close(self) -> Cluster {
        Cluster {
            center_us: self.mean(),
            count: self.count,
        }
    }
}

/// Duration cluster detector
#[derive(Debug, Clone, Copy)]
pub struct ClusterDetector {
    tolerance: f64,
}

impl Default for ClusterDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTER_TOLERANCE)
    }
}

impl ClusterDetector {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Cluster a duration series
    ///
    /// Returns clusters ordered by member count, most frequent first; equal
    /// counts keep ascending-duration order. Member counts always sum to
    /// `durations.len()`.
    pub fn detect(&self, durations: &[f64]) -> Vec<Cluster> {
        let mut sorted = durations.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut values = sorted.into_iter();
        let Some(first) = values.next() else {
            return Vec::new();
        };

        let mut clusters = Vec::new();
        let mut current = OpenCluster::start(first);

        for value in values {
            if self.joins(&current, value) {
                current.push(value);
            } else {
                clusters.push(current.close());
                current = OpenCluster::start(value);
            }
        }
        clusters.push(current.close());

        // Stable: ties keep ascending-duration order
        clusters.sort_by(|a, b| b.count.cmp(&a.count));
        clusters
    }

    /// Relative-deviation test against the running mean
    ///
    /// A zero mean only admits further zeros; any non-zero value opens a new cluster.
    fn joins(&self, cluster: &OpenCluster, value: f64) -> bool {
        let mean = cluster.mean();
        if mean == 0.0 {
            return value == 0.0;
        }
        (value - mean).abs() / mean <= self.tolerance
    }
}
