//! Process-wide type registry.
//!
//! Mirrors the [`TypeRegistry`] operations as free functions over one
//! lazily-created registry. Registration takes the write lock; extension,
//! membership and retraction share the read lock. Code that wants explicit
//! ownership should build its own [`TypeRegistry`] instead.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::capabilities::{Capability, Capable, TypeDefinition, TypeRegistry};
use crate::error::Result;
use crate::identity::TypeIdentity;
use crate::record::Record;
use crate::utilities::config::RegistryConfig;

static REGISTRY: Lazy<RwLock<TypeRegistry>> = Lazy::new(|| RwLock::new(TypeRegistry::new()));

/// Register capabilities on the global registry. See [`TypeRegistry::define_type`].
pub fn define_type<N, P, S, R, K>(
    identity: &TypeIdentity,
    named_fns: N,
    prop_names: P,
    renamed_fns: R,
) -> Result<()>
where
    N: IntoIterator<Item = Capability>,
    P: IntoIterator<Item = S>,
    S: Into<String>,
    R: IntoIterator<Item = (K, Capability)>,
    K: Into<String>,
{
    REGISTRY
        .write()
        .define_type(identity, named_fns, prop_names, renamed_fns)
}

/// Register a [`TypeDefinition`] on the global registry.
pub fn define(identity: &TypeIdentity, definition: TypeDefinition) -> Result<()> {
    REGISTRY.write().define(identity, definition)
}

/// See [`TypeRegistry::become_type`].
pub fn become_type<'r>(target: &'r mut Record, identity: &TypeIdentity) -> &'r mut Record {
    REGISTRY.read().become_type(target, identity)
}

/// See [`TypeRegistry::is_type`].
pub fn is_type<T: Capable + ?Sized>(obj: &T, identity: &TypeIdentity) -> bool {
    REGISTRY.read().is_type(obj, identity)
}

/// See [`TypeRegistry::renounce_type`].
pub fn renounce_type<'r>(
    obj: &'r mut Record,
    identity: &TypeIdentity,
    fallback: Option<&TypeIdentity>,
) -> &'r mut Record {
    REGISTRY.read().renounce_type(obj, identity, fallback)
}

/// Run `f` with shared access to the global registry.
///
/// The read lock is held while `f` runs, so `f` must not call [`define`],
/// [`define_type`], [`configure`] or [`reset`]; the lock is not reentrant
/// and those calls would deadlock.
pub fn with_registry<T>(f: impl FnOnce(&TypeRegistry) -> T) -> T {
    f(&REGISTRY.read())
}

/// Replace the global registry with an empty one built from `config`.
///
/// Returns the number of descriptors dropped.
pub fn configure(config: RegistryConfig) -> usize {
    let mut registry = REGISTRY.write();
    let dropped = registry.len();
    *registry = TypeRegistry::with_config(config);
    log::debug!("Global type registry reconfigured, {} descriptors dropped", dropped);
    dropped
}

/// Drop every globally registered descriptor, keeping the configuration.
pub fn reset() -> usize {
    REGISTRY.write().clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::config::EmptyDescriptorPolicy;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::thread;

    /// Serializes tests that share the global registry.
    static GLOBAL_TESTS: Mutex<()> = Mutex::new(());

    fn speak() -> Capability {
        Capability::named("speak", |_: &Record, _: &[Value]| Ok(json!("...")))
    }

    #[test]
    fn test_global_round_trip() {
        let _guard = GLOBAL_TESTS.lock();
        let animal = TypeIdentity::new("GlobalAnimal");
        define_type(&animal, vec![speak()], ["name"], Vec::<(String, Capability)>::new()).unwrap();

        let mut rex = Record::new().with("name", "Rex");
        let rex = become_type(&mut rex, &animal);
        assert!(is_type(&*rex, &animal));
        assert_eq!(rex.call("speak", &[]).unwrap(), json!("..."));

        let rex = renounce_type(rex, &animal, None);
        assert!(!rex.contains("speak"));
        assert!(!rex.contains("name"));
        assert!(!is_type(&*rex, &animal));
    }

    #[test]
    fn test_global_visible_across_threads() {
        let _guard = GLOBAL_TESTS.lock();
        let animal = TypeIdentity::new("ThreadedAnimal");
        define(&animal, TypeDefinition::new().function(speak())).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let animal = animal.clone();
                thread::spawn(move || {
                    let mut record = Record::new().with("n", i);
                    become_type(&mut record, &animal);
                    is_type(&record, &animal)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert!(with_registry(|registry| registry.contains(&animal)));
    }

    #[test]
    fn test_reset_drops_descriptors() {
        let _guard = GLOBAL_TESTS.lock();
        let animal = TypeIdentity::new("ResetAnimal");
        let plant = TypeIdentity::new("ResetPlant");
        define(&animal, TypeDefinition::new().function(speak())).unwrap();
        define(&plant, TypeDefinition::new().property("leaves")).unwrap();
        let registered = with_registry(|registry| registry.len());

        assert_eq!(reset(), registered);
        assert!(registered >= 2);
        assert!(with_registry(|registry| !registry.contains(&animal)));
        assert!(with_registry(|registry| registry.is_empty()));
        assert_eq!(reset(), 0);

        let mut record = Record::new();
        become_type(&mut record, &animal);
        assert!(!record.contains("speak"));
    }

    #[test]
    fn test_configure_switches_empty_descriptor_policy() {
        let _guard = GLOBAL_TESTS.lock();
        let marker = TypeIdentity::new("ConfiguredMarker");
        define(&marker, TypeDefinition::new().property("flag")).unwrap();
        assert!(is_type(&Record::new(), &marker));

        let dropped = configure(RegistryConfig {
            empty_descriptor_policy: EmptyDescriptorPolicy::NeverMatch,
            ..Default::default()
        });
        assert!(dropped >= 1);
        assert!(with_registry(|registry| !registry.contains(&marker)));

        define(&marker, TypeDefinition::new().property("flag")).unwrap();
        assert!(!is_type(&Record::new(), &marker));
        let mut tagged = Record::new();
        become_type(&mut tagged, &marker);
        assert!(is_type(&tagged, &marker));

        configure(RegistryConfig::default());
        assert_eq!(
            with_registry(|registry| registry.empty_descriptor_policy()),
            EmptyDescriptorPolicy::Vacuous
        );
        assert!(is_type(&Record::new(), &TypeIdentity::new("Unregistered")));
    }
}
