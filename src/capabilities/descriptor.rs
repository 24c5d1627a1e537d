//! Type descriptors: the capability set registered under one identity.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::capability::Capability;
use crate::identity::TypeIdentity;

/// Capabilities and tracked property names registered under an identity.
///
/// Capability names are unique; registering a name again replaces the
/// previous callable. Tracked properties are only remembered so retraction
/// can remove them; their values belong to the caller.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    identity: TypeIdentity,
    capabilities: HashMap<String, Capability>,
    tracked_properties: BTreeSet<String>,
}

impl TypeDescriptor {
    /// Create an empty descriptor for `identity`.
    pub fn new(identity: TypeIdentity) -> Self {
        Self {
            identity,
            capabilities: HashMap::new(),
            tracked_properties: BTreeSet::new(),
        }
    }

    /// The identity this descriptor is registered under.
    pub fn identity(&self) -> &TypeIdentity {
        &self.identity
    }

    /// Look up a capability by registered name.
    pub fn capability(&self, name: &str) -> Option<&Capability> {
        self.capabilities.get(name)
    }

    /// Iterate over `(registered name, capability)` pairs.
    pub fn capabilities(&self) -> impl Iterator<Item = (&String, &Capability)> {
        self.capabilities.iter()
    }

    /// Registered capability names.
    pub fn capability_names(&self) -> BTreeSet<String> {
        self.capabilities.keys().cloned().collect()
    }

    /// Tracked property names.
    pub fn tracked_properties(&self) -> &BTreeSet<String> {
        &self.tracked_properties
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether no capability is registered.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Register `cap` under `name`, returning the callable it replaced.
    pub(crate) fn insert_capability(&mut self, name: String, cap: Capability) -> Option<Capability> {
        self.capabilities.insert(name, cap)
    }

    /// Track a property name. Returns `false` if it was already tracked.
    pub(crate) fn track(&mut self, name: String) -> bool {
        self.tracked_properties.insert(name)
    }

    /// A serializable snapshot for diagnostics.
    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            identity: self.identity.id().to_string(),
            label: self.identity.label().to_string(),
            capabilities: self.capability_names().into_iter().collect(),
            tracked_properties: self.tracked_properties.iter().cloned().collect(),
        }
    }
}

/// Serializable view of a [`TypeDescriptor`]. Name lists are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorSummary {
    pub identity: String,
    pub label: String,
    pub capabilities: Vec<String>,
    pub tracked_properties: Vec<String>,
}
