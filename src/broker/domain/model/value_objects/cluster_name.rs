use sha2::{Digest, Sha256};

use crate::broker::domain::model::value_objects::instance_id::InstanceId;

const TRUNCATED_PREFIX_LENGTH: usize = 14;
const DIGEST_SUFFIX_BYTES: usize = 4;

lazy_static::lazy_static! {
    static ref VERBATIM_CLUSTER_NAME_REGEX: regex::Regex =
        regex::Regex::new("^[a-z][a-z0-9-]{0,22}$").expect("valid regex");
    static ref DIGEST_SUFFIX_REGEX: regex::Regex =
        regex::Regex::new("-[0-9a-f]{8}$").expect("valid regex");
}

/// Atlas cluster name derived from a service instance ID.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClusterName(String);

impl ClusterName {
    /// Names are lowercase `[a-z0-9-]`, start with a letter and fit the Atlas
    /// limit of 23 characters.
    ///
    /// An ID that already is such a name is used as is. Any other ID keeps a
    /// readable sanitized prefix followed by a digest of the raw ID, so IDs
    /// that only differ in case or punctuation, or share a long prefix, never
    /// land on the same cluster. Verbatim names ending in something that looks
    /// like a digest suffix are hashed too, keeping the two forms disjoint.
    pub fn from_instance_id(instance_id: &InstanceId) -> Self {
        let raw = instance_id.value();

        if VERBATIM_CLUSTER_NAME_REGEX.is_match(raw) && !DIGEST_SUFFIX_REGEX.is_match(raw) {
            return Self(raw.to_string());
        }

        let mut sanitized: String = raw
            .chars()
            .map(|c| {
                let c = c.to_ascii_lowercase();
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();

        if !sanitized.starts_with(|c: char| c.is_ascii_lowercase()) {
            sanitized.insert(0, 'c');
        }

        let digest = Sha256::digest(raw.as_bytes());
        let suffix: String = digest
            .iter()
            .take(DIGEST_SUFFIX_BYTES)
            .map(|byte| format!("{byte:02x}"))
            .collect();
        sanitized.truncate(TRUNCATED_PREFIX_LENGTH);
        let prefix = sanitized.trim_end_matches('-');

        Self(format!("{prefix}-{suffix}"))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
