//! Instance retraction: stripping a descriptor back off a record.

use super::registry::TypeRegistry;
use crate::identity::TypeIdentity;
use crate::record::Record;

impl TypeRegistry {
    /// Remove `identity`'s capabilities and tracked properties from `obj`.
    ///
    /// Every field named like a registered capability or a tracked property
    /// is deleted, whatever it holds. The tag becomes `fallback` when given,
    /// otherwise the baseline for the record's kind (see
    /// [`TypeRegistry::baseline_for`]). Other fields are left alone.
    pub fn renounce_type<'r>(
        &self,
        obj: &'r mut Record,
        identity: &TypeIdentity,
        fallback: Option<&TypeIdentity>,
    ) -> &'r mut Record {
        let mut removed = 0;
        match self.descriptor(identity) {
            Some(descriptor) => {
                for (name, _) in descriptor.capabilities() {
                    if obj.remove(name).is_some() {
                        removed += 1;
                    }
                }
                for name in descriptor.tracked_properties() {
                    if obj.remove(name).is_some() {
                        removed += 1;
                    }
                }
            }
            None => {
                log::debug!("Renouncing unregistered type '{}'", identity);
            }
        }

        let baseline = match fallback {
            Some(identity) => identity.clone(),
            None => self.baseline_for(obj.kind()),
        };
        log::debug!(
            "Record renounced '{}' ({} fields removed), now '{}'",
            identity,
            removed,
            baseline
        );
        obj.set_type_identity(baseline);
        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{Capability, TypeDefinition};
    use crate::record::RecordKind;
    use serde_json::{json, Value};

    fn animal(registry: &mut TypeRegistry) -> TypeIdentity {
        let id = TypeIdentity::new("Animal");
        registry
            .define(
                &id,
                TypeDefinition::new()
                    .function(Capability::named("speak", |_: &Record, _: &[Value]| {
                        Ok(json!("..."))
                    }))
                    .property("name"),
            )
            .unwrap();
        id
    }

    #[test]
    fn test_animal_scenario() {
        crate::utilities::logger::init_for_tests();
        let mut registry = TypeRegistry::new();
        let animal = animal(&mut registry);
        let mut rex = Record::from_json(json!({"name": "Rex"})).unwrap();

        let result = registry.become_type(&mut rex, &animal);
        assert!(registry.is_type(&*result, &animal));
        assert_eq!(result.call("speak", &[]).unwrap(), json!("..."));

        let result = registry.renounce_type(&mut rex, &animal, None);
        assert!(result.get("speak").is_none());
        assert!(result.get("name").is_none());
        assert!(!registry.is_type(&*result, &animal));
    }

    #[test]
    fn test_renounce_keeps_unrelated_fields() {
        let mut registry = TypeRegistry::new();
        let animal = animal(&mut registry);
        let mut rex = Record::new().with("name", "Rex").with("owner", "Ana");
        registry.become_type(&mut rex, &animal);
        registry.renounce_type(&mut rex, &animal, None);
        assert_eq!(rex.field_names(), vec!["owner".to_string()]);
        assert_eq!(rex.get_data("owner"), Some(&json!("Ana")));
    }

    #[test]
    fn test_renounce_infers_baseline_by_kind() {
        let mut registry = TypeRegistry::new();
        let animal = animal(&mut registry);

        let mut plain = Record::new();
        registry.become_type(&mut plain, &animal);
        registry.renounce_type(&mut plain, &animal, None);
        assert_eq!(plain.type_identity(), &TypeIdentity::plain_record());

        let mut pack = Record::sequence(vec![json!("Rex"), json!("Fido")]);
        registry.become_type(&mut pack, &animal);
        registry.renounce_type(&mut pack, &animal, None);
        assert_eq!(pack.type_identity(), &TypeIdentity::sequence());
        assert_eq!(pack.items().len(), 2);
    }

    #[test]
    fn test_renounce_uses_fallback() {
        let mut registry = TypeRegistry::new();
        let animal = animal(&mut registry);
        let pet = TypeIdentity::new("Pet");
        let mut rex = Record::new();
        registry.become_type(&mut rex, &animal);
        registry.renounce_type(&mut rex, &animal, Some(&pet));
        assert_eq!(rex.type_identity(), &pet);
    }

    #[test]
    fn test_renounce_uses_configured_baseline() {
        let mut registry = TypeRegistry::new();
        let animal = animal(&mut registry);
        let herd = TypeIdentity::new("Herd");
        registry.set_baseline(RecordKind::Sequence, herd.clone());

        let mut pack = Record::sequence(vec![]);
        registry.become_type(&mut pack, &animal);
        registry.renounce_type(&mut pack, &animal, None);
        assert_eq!(pack.type_identity(), &herd);
    }

    #[test]
    fn test_renounce_removes_data_fields_sharing_names() {
        let mut registry = TypeRegistry::new();
        let animal = animal(&mut registry);
        let mut record = Record::new().with("speak", "plain data").with("keep", true);
        registry.renounce_type(&mut record, &animal, None);
        assert!(!record.contains("speak"));
        assert!(record.contains("keep"));
    }

    #[test]
    fn test_renounce_unknown_identity_only_resets_tag() {
        let registry = TypeRegistry::new();
        let ghost = TypeIdentity::new("Ghost");
        let mut record = Record::new().with("x", 1);
        record.set_type_identity(ghost.clone());
        registry.renounce_type(&mut record, &ghost, None);
        assert_eq!(record.field_names(), vec!["x".to_string()]);
        assert_eq!(record.type_identity(), &TypeIdentity::plain_record());
    }

    #[test]
    fn test_extend_retract_round_trip_restores_field_set() {
        let mut registry = TypeRegistry::new();
        let animal = animal(&mut registry);
        let mut record = Record::new().with("color", "brown");
        let before = record.field_names();
        registry.become_type(&mut record, &animal);
        registry.renounce_type(&mut record, &animal, None);
        assert_eq!(record.field_names(), before);
    }
}
