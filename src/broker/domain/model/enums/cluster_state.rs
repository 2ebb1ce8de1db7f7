use std::fmt;

use serde::{Deserialize, Serialize};

/// Cluster state as reported by Atlas in `stateName`.
///
/// States Atlas may add later are kept verbatim in `Unknown` so the operation
/// tracker can report them instead of failing deserialization.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterState {
    Creating,
    Idle,
    Updating,
    Repairing,
    Deleting,
    Deleted,
    Unknown(String),
}

impl ClusterState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Creating => "CREATING",
            Self::Idle => "IDLE",
            Self::Updating => "UPDATING",
            Self::Repairing => "REPAIRING",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
            Self::Unknown(value) => value,
        }
    }
}

impl Default for ClusterState {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for ClusterState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CREATING" => Self::Creating,
            "IDLE" => Self::Idle,
            "UPDATING" => Self::Updating,
            "REPAIRING" => Self::Repairing,
            "DELETING" => Self::Deleting,
            "DELETED" => Self::Deleted,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ClusterState> for String {
    fn from(value: ClusterState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ClusterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
