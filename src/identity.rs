//! Opaque type identities.
//!
//! A [`TypeIdentity`] is the handle a type descriptor is registered under and
//! the nominal tag a record carries once it has become an instance of a type.
//! Equality, hashing and ordering only look at the underlying UUID; the label
//! exists for logs and diagnostics.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for deterministic baseline identities.
const BASELINE_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2d9a_4b7e_4c1f_9a3d_52e8_b0c4_7a11);

/// Label of the baseline identity for plain records.
pub const PLAIN_RECORD_LABEL: &str = "record";

/// Label of the baseline identity for sequence records.
pub const SEQUENCE_LABEL: &str = "sequence";

/// An opaque, comparable type handle.
#[derive(Clone, Serialize, Deserialize)]
pub struct TypeIdentity {
    id: Uuid,
    label: String,
}

impl TypeIdentity {
    /// Mint a fresh identity.
    ///
    /// Every call returns a distinct identity, even for identical labels.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }

    /// Deterministic identity for a baseline category.
    ///
    /// Two calls with the same label compare equal.
    pub fn named_baseline(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: Uuid::new_v5(&BASELINE_NAMESPACE, label.as_bytes()),
            label,
        }
    }

    /// Baseline identity of a plain (non-sequence) record.
    pub fn plain_record() -> Self {
        Self::named_baseline(PLAIN_RECORD_LABEL)
    }

    /// Baseline identity of a sequence record.
    pub fn sequence() -> Self {
        Self::named_baseline(SEQUENCE_LABEL)
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The underlying unique id.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for TypeIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeIdentity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIdentity({}#{})", self.label, self.id)
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_label_distinct_identities() {
        let a = TypeIdentity::new("Animal");
        let b = TypeIdentity::new("Animal");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.label(), b.label());
    }

    #[test]
    fn test_baselines_are_deterministic() {
        assert_eq!(TypeIdentity::plain_record(), TypeIdentity::plain_record());
        assert_eq!(TypeIdentity::sequence(), TypeIdentity::named_baseline("sequence"));
        assert_ne!(TypeIdentity::plain_record(), TypeIdentity::sequence());
    }

    #[test]
    fn test_usable_as_key() {
        let a = TypeIdentity::new("A");
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(TypeIdentity::new("A"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_display_uses_label() {
        let id = TypeIdentity::new("Point");
        assert_eq!(id.to_string(), "Point");
        assert!(format!("{:?}", id).starts_with("TypeIdentity(Point#"));
    }
}
