//! A single classified line of the CSV report.

/// Column holding the proxy (cluster) name.
pub const CLUSTER_FIELD: usize = 0;
/// Column holding the server name, or `FRONTEND`/`BACKEND`.
pub const ENTITY_FIELD: usize = 1;
/// Column holding the status string, e.g. `UP`, `DOWN`, `UP 3/3`.
pub const STATUS_FIELD: usize = 17;

/// A non-blank data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// Synthetic per-cluster summary row. Registers the cluster, never counted.
    Aggregate { cluster: &'a str, entity: &'a str },
    /// One backend server.
    Server {
        cluster: &'a str,
        server: &'a str,
        status: &'a str,
    },
}

impl<'a> Row<'a> {
    pub fn cluster(&self) -> &'a str {
        match *self {
            Row::Aggregate { cluster, .. } | Row::Server { cluster, .. } => cluster,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Row::Aggregate { .. })
    }
}

/// Leading token of a status field, with any diagnostic suffix dropped.
///
/// `"UP 3/3"` → `"UP"`, `"DOWN"` → `"DOWN"`, `""` → `""`.
pub fn status_keyword(status: &str) -> &str {
    status.split(' ').next().unwrap_or(status)
}
