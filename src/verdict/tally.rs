//! Per-cluster server counts.
//!
//! # Responsibilities
//! - Register clusters in first-seen order, from any row type
//! - Count server rows per status keyword
//! - Render the `<cluster> (Active: <up>/<up+down>) ` summary

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

use crate::report::Row;

pub const UP: &str = "UP";
pub const DOWN: &str = "DOWN";

/// Server counts for one cluster.
///
/// `UP` and `DOWN` always exist (starting at zero); any other keyword is
/// counted in its own bucket but does not appear in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterCounts {
    name: String,
    up: u64,
    down: u64,
    other: BTreeMap<String, u64>,
}

impl ClusterCounts {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            up: 0,
            down: 0,
            other: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn up(&self) -> u64 {
        self.up
    }

    pub fn down(&self) -> u64 {
        self.down
    }

    /// Servers counted in the summary denominator.
    pub fn total(&self) -> u64 {
        self.up + self.down
    }

    /// Count for an arbitrary keyword.
    pub fn count(&self, keyword: &str) -> u64 {
        match keyword {
            UP => self.up,
            DOWN => self.down,
            _ => self.other.get(keyword).copied().unwrap_or(0),
        }
    }

    /// Keywords other than `UP`/`DOWN` seen for this cluster.
    pub fn other(&self) -> &BTreeMap<String, u64> {
        &self.other
    }

    fn record(&mut self, keyword: &str) {
        match keyword {
            UP => self.up += 1,
            DOWN => self.down += 1,
            _ => *self.other.entry(keyword.to_string()).or_insert(0) += 1,
        }
    }
}

/// Insertion-ordered table of cluster counts, owned by a single run.
#[derive(Debug, Clone, Default)]
pub struct ClusterTally {
    clusters: Vec<ClusterCounts>,
    index: HashMap<String, usize>,
}

impl ClusterTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` if unseen and return its counts.
    pub fn discover(&mut self, name: &str) -> &mut ClusterCounts {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.clusters.len();
                self.clusters.push(ClusterCounts::new(name));
                self.index.insert(name.to_string(), idx);
                tracing::trace!(cluster = name, "Cluster discovered");
                idx
            }
        };
        &mut self.clusters[idx]
    }

    /// Count one server under `keyword`.
    pub fn record(&mut self, cluster: &str, keyword: &str) {
        self.discover(cluster).record(keyword);
    }

    /// Apply a parsed row: every row registers its cluster, server rows are counted.
    pub fn observe(&mut self, row: &Row<'_>) {
        match row {
            Row::Aggregate { cluster, .. } => {
                self.discover(cluster);
            }
            Row::Server { cluster, status, .. } => self.record(cluster, status),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClusterCounts> {
        self.index.get(name).map(|&idx| &self.clusters[idx])
    }

    /// Clusters in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ClusterCounts> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Summary text; every entry, the last included, ends with a space.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for cluster in &self.clusters {
            // Writing to a String cannot fail.
            let _ = write!(
                out,
                "{} (Active: {}/{}) ",
                cluster.name,
                cluster.up,
                cluster.total()
            );
        }
        out
    }
}
