use std::path::Path;

use crate::groupby::{Aggregation, Groups};

/// Departments with their distinct teams.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    groups: Groups,
}

impl Hierarchy {
    /// Reads the hierarchy from `path`. Duplicated teams are dropped no matter
    /// how `aggregation` was configured. Any failure is logged and results in
    /// an empty hierarchy.
    pub fn load<P: AsRef<Path>>(path: P, aggregation: Aggregation) -> Hierarchy {
        Hierarchy {
            groups: aggregation.keep_duplicates(false).read_path_or_empty(path),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn teams(&self, department: &str) -> Option<&[String]> {
        self.groups.get(department)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(dept, teams)| (dept.as_str(), teams.as_slice()))
    }
}
