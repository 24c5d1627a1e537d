//! Type membership: nominal tag match, then structural containment.

use std::collections::BTreeSet;

use super::registry::TypeRegistry;
use crate::identity::TypeIdentity;
use crate::record::Record;
use crate::utilities::config::EmptyDescriptorPolicy;

/// Anything that can be tested against a type descriptor.
pub trait Capable {
    /// The nominal type tag.
    fn type_identity(&self) -> &TypeIdentity;

    /// Whether a callable member with this name is reachable.
    fn has_callable(&self, name: &str) -> bool;

    /// Names of every reachable callable member.
    fn callable_names(&self) -> BTreeSet<String>;
}

impl Capable for Record {
    fn type_identity(&self) -> &TypeIdentity {
        Record::type_identity(self)
    }

    fn has_callable(&self, name: &str) -> bool {
        self.has_capability(name)
    }

    fn callable_names(&self) -> BTreeSet<String> {
        self.capability_names()
    }
}

/// Whether every required capability name is available.
pub fn satisfies(available: &BTreeSet<String>, required: &BTreeSet<String>) -> bool {
    required.is_subset(available)
}

impl TypeRegistry {
    /// Whether `obj` is an instance of `identity`.
    ///
    /// A matching nominal tag answers immediately. Otherwise `obj` must carry
    /// a callable for every capability name registered under `identity`.
    /// When the descriptor has no capabilities (or does not exist) the
    /// outcome follows [`EmptyDescriptorPolicy`].
    pub fn is_type<T: Capable + ?Sized>(&self, obj: &T, identity: &TypeIdentity) -> bool {
        if obj.type_identity() == identity {
            return true;
        }

        let required = self
            .descriptor(identity)
            .map(|descriptor| descriptor.capability_names())
            .unwrap_or_default();
        if required.is_empty() {
            return match self.empty_descriptor_policy() {
                EmptyDescriptorPolicy::Vacuous => true,
                EmptyDescriptorPolicy::NeverMatch => false,
            };
        }

        satisfies(&obj.callable_names(), &required)
    }

    /// Capability names of `identity` that `obj` lacks as callables.
    pub fn missing_capabilities<T: Capable + ?Sized>(
        &self,
        obj: &T,
        identity: &TypeIdentity,
    ) -> BTreeSet<String> {
        match self.descriptor(identity) {
            Some(descriptor) => descriptor
                .capability_names()
                .into_iter()
                .filter(|name| !obj.has_callable(name))
                .collect(),
            None => BTreeSet::new(),
        }
    }
}
