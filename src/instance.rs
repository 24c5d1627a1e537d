//! Typed instances: a record paired with a bound method table.
//!
//! [`TypeRegistry::become_type`] writes capabilities into the record itself.
//! An [`Instance`] leaves the record's fields alone and dispatches through a
//! [`MethodTable`] snapshot taken from the descriptor when the instance was
//! built. [`Instance::into_record`] materialises the table onto the record.
//!
//! [`TypeRegistry::become_type`]: crate::capabilities::TypeRegistry::become_type

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde_json::Value;

use crate::capabilities::{Capability, Capable, TypeDescriptor};
use crate::error::Result;
use crate::identity::TypeIdentity;
use crate::record::Record;

/// Capabilities bound for dispatch, keyed by registered name.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    methods: HashMap<String, Capability>,
}

impl MethodTable {
    /// Snapshot a descriptor's capabilities. `None` yields an empty table.
    pub fn from_descriptor(descriptor: Option<&TypeDescriptor>) -> Self {
        let methods: HashMap<String, Capability> = descriptor
            .map(|d| {
                d.capabilities()
                    .map(|(name, cap)| (name.clone(), cap.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Self { methods }
    }

    /// Look up a bound capability.
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.methods.get(name)
    }

    /// Whether a capability is bound under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Bound capability names.
    pub fn names(&self) -> BTreeSet<String> {
        self.methods.keys().cloned().collect()
    }

    /// Iterate over `(name, capability)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Capability)> {
        self.methods.iter()
    }

    /// Number of bound capabilities.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// A record viewed as an instance of one type.
///
/// The instance owns the nominal tag: the wrapped record always carries
/// [`Instance::identity`], whatever a caller does through
/// [`Instance::update_record`].
#[derive(Debug, Clone)]
pub struct Instance {
    record: Record,
    identity: TypeIdentity,
    methods: Arc<MethodTable>,
}

impl Instance {
    /// Pair `record` with `methods` under `identity`.
    ///
    /// The record's own tag is set to `identity` as well.
    pub fn bind(mut record: Record, identity: TypeIdentity, methods: MethodTable) -> Self {
        record.set_type_identity(identity.clone());
        Self {
            record,
            identity,
            methods: Arc::new(methods),
        }
    }

    /// The type this instance was bound to.
    pub fn identity(&self) -> &TypeIdentity {
        &self.identity
    }

    /// The bound method table.
    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// The wrapped record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Mutate the wrapped record.
    ///
    /// Field changes stick. The record's tag is reset to the instance's
    /// identity once `f` returns.
    pub fn update_record<T>(&mut self, f: impl FnOnce(&mut Record) -> T) -> T {
        let out = f(&mut self.record);
        if self.record.type_identity() != &self.identity {
            log::debug!("Instance of '{}' kept its tag after record update", self.identity);
            self.record.set_type_identity(self.identity.clone());
        }
        out
    }

    /// Invoke a capability.
    ///
    /// The method table is consulted first, then the record's own callable
    /// fields. Errors are those of [`Record::call`].
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.methods.get(name) {
            Some(cap) => cap.invoke(&self.record, args),
            None => self.record.call(name, args),
        }
    }

    /// Unwrap, writing the bound methods onto the record as callable fields.
    pub fn into_record(self) -> Record {
        let mut record = self.record;
        for (name, cap) in self.methods.iter() {
            record.set_capability(name.clone(), cap.clone());
        }
        record.set_type_identity(self.identity);
        record
    }
}

impl Capable for Instance {
    fn type_identity(&self) -> &TypeIdentity {
        &self.identity
    }

    fn has_callable(&self, name: &str) -> bool {
        self.methods.contains(name) || self.record.has_capability(name)
    }

    fn callable_names(&self) -> BTreeSet<String> {
        let mut names = self.methods.names();
        names.extend(self.record.capability_names());
        names
    }
}
