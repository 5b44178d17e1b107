use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::path::{join_entry, parent_dir};
use crate::pattern::CaptureList;

/// A concrete path produced by matching a [`PathPattern`](crate::PathPattern),
/// together with the capture groups of every consumed segment in path order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathMatch {
    path: String,
    groups: Vec<String>,
}

impl PathMatch {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            groups: Vec::new(),
        }
    }

    pub fn with_groups<I>(path: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            path: path.into(),
            groups: groups.into_iter().collect(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// The final segment of the path; empty for the root.
    pub fn leaf_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.path, self.groups)
    }

    pub(crate) fn child(&self, name: &str, captures: CaptureList) -> Self {
        let mut groups = Vec::with_capacity(self.groups.len() + captures.len());
        groups.extend_from_slice(&self.groups);
        groups.extend(captures);
        Self {
            path: join_entry(&self.path, name),
            groups,
        }
    }

    pub(crate) fn parent(&self) -> Self {
        Self {
            path: parent_dir(&self.path),
            groups: self.groups.clone(),
        }
    }
}

impl fmt::Display for PathMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
