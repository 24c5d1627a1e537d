//! Instance extension: attaching a descriptor's capabilities onto a record.

use super::registry::TypeRegistry;
use crate::identity::TypeIdentity;
use crate::instance::{Instance, MethodTable};
use crate::record::Record;

impl TypeRegistry {
    /// Make `target` an instance of `identity` in place.
    ///
    /// Every capability currently registered under `identity` is set as a
    /// callable field on `target`, sharing the registered body, and the
    /// record is tagged with `identity`. Fields that are not capability names
    /// of the descriptor are left alone. Applying the same type twice yields
    /// the same field set. An unknown identity only changes the tag.
    ///
    /// The attached fields are a snapshot: later registrations under
    /// `identity` do not reach records extended before them.
    pub fn become_type<'r>(&self, target: &'r mut Record, identity: &TypeIdentity) -> &'r mut Record {
        match self.descriptor(identity) {
            Some(descriptor) => {
                for (name, cap) in descriptor.capabilities() {
                    target.set_capability(name.clone(), cap.clone());
                }
                log::debug!(
                    "Record became '{}' ({} capabilities attached)",
                    identity,
                    descriptor.len()
                );
            }
            None => {
                log::debug!("Record became unregistered type '{}'", identity);
            }
        }
        target.set_type_identity(identity.clone());
        target
    }

    /// Wrap `record` as an instance of `identity` without touching its fields.
    ///
    /// The returned [`Instance`] dispatches through a method table bound from
    /// the descriptor at call time.
    pub fn instance(&self, record: Record, identity: &TypeIdentity) -> Instance {
        let methods = MethodTable::from_descriptor(self.descriptor(identity));
        Instance::bind(record, identity.clone(), methods)
    }
}
