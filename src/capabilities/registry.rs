//! Type Registry: descriptors indexed by identity.
//!
//! The registry is an ordinary value. Build one with [`TypeRegistry::new`]
//! (or [`TypeRegistry::with_config`]) and hand it to whatever needs to define
//! or consume types. A process-wide instance lives in [`crate::global`].
//!
//! Registration is additive: the first [`TypeRegistry::define_type`] call for
//! an identity creates its descriptor, later calls extend it.

use std::collections::HashMap;

use super::capability::Capability;
use super::definition::TypeDefinition;
use super::descriptor::{DescriptorSummary, TypeDescriptor};
use crate::error::{Result, TypeError};
use crate::identity::TypeIdentity;
use crate::record::RecordKind;
use crate::utilities::config::{EmptyDescriptorPolicy, RegistryConfig};

/// Registry of type descriptors.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Descriptors indexed by identity
    descriptors: HashMap<TypeIdentity, TypeDescriptor>,

    /// Behavioural settings
    config: RegistryConfig,

    /// Baseline identities that override the well-known ones per record kind
    baselines: HashMap<RecordKind, TypeIdentity>,
}

impl TypeRegistry {
    /// Create an empty registry with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut baselines = HashMap::new();
        for kind in [RecordKind::Plain, RecordKind::Sequence] {
            if let Some(identity) = config.configured_baseline(kind) {
                baselines.insert(kind, identity);
            }
        }
        Self {
            descriptors: HashMap::new(),
            config,
            baselines,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// How membership treats descriptors without capabilities.
    pub fn empty_descriptor_policy(&self) -> EmptyDescriptorPolicy {
        self.config.empty_descriptor_policy
    }

    /// Register capabilities and tracked properties under `identity`.
    ///
    /// Every entry of `named_fns` is registered under its own name, then every
    /// entry of `renamed_fns` under its explicit key, so a renamed entry wins
    /// over a same-named one. Property names are added to the tracked set.
    ///
    /// # Errors
    ///
    /// [`TypeError::InvalidCapability`] when an entry of `named_fns` has no
    /// resolvable name or a key of `renamed_fns` is empty. Inputs are checked
    /// before anything is written, so on error the registry is unchanged.
    pub fn define_type<N, P, S, R, K>(
        &mut self,
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
        let named = named_fns
            .into_iter()
            .enumerate()
            .map(|(position, cap)| match cap.name().map(str::to_string) {
                Some(name) => Ok((name, cap)),
                None => Err(TypeError::InvalidCapability(format!(
                    "function #{} for type '{}' has no resolvable name; register it under an explicit key",
                    position, identity
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let renamed = renamed_fns
            .into_iter()
            .map(|(key, cap)| {
                let key = key.into();
                if key.is_empty() {
                    Err(TypeError::InvalidCapability(format!(
                        "empty capability key for type '{}'",
                        identity
                    )))
                } else {
                    Ok((key, cap))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let props: Vec<String> = prop_names.into_iter().map(Into::into).collect();

        let descriptor = self
            .descriptors
            .entry(identity.clone())
            .or_insert_with(|| {
                log::debug!("Creating type descriptor '{}'", identity);
                TypeDescriptor::new(identity.clone())
            });

        let (named_count, renamed_count) = (named.len(), renamed.len());
        for (name, cap) in named {
            descriptor.insert_capability(name, cap);
        }
        for (name, cap) in renamed {
            if descriptor.insert_capability(name.clone(), cap).is_some() {
                log::warn!(
                    "Capability '{}' of type '{}' replaced by renamed entry",
                    name,
                    identity
                );
            }
        }
        let mut tracked = 0;
        for prop in props {
            if descriptor.track(prop) {
                tracked += 1;
            }
        }

        log::debug!(
            "Defined type '{}': {} named, {} renamed, {} new tracked properties ({} capabilities total)",
            identity,
            named_count,
            renamed_count,
            tracked,
            descriptor.len()
        );
        Ok(())
    }

    /// Register a [`TypeDefinition`] under `identity`.
    pub fn define(&mut self, identity: &TypeIdentity, definition: TypeDefinition) -> Result<()> {
        self.define_type(
            identity,
            definition.named_fns,
            definition.prop_names,
            definition.renamed_fns,
        )
    }

    /// Look up a descriptor.
    pub fn descriptor(&self, identity: &TypeIdentity) -> Option<&TypeDescriptor> {
        self.descriptors.get(identity)
    }

    /// Whether a descriptor exists for `identity`.
    pub fn contains(&self, identity: &TypeIdentity) -> bool {
        self.descriptors.contains_key(identity)
    }

    /// All registered identities.
    pub fn identities(&self) -> Vec<&TypeIdentity> {
        self.descriptors.keys().collect()
    }

    /// Summaries of every descriptor, sorted by label.
    pub fn summaries(&self) -> Vec<DescriptorSummary> {
        let mut summaries: Vec<DescriptorSummary> =
            self.descriptors.values().map(TypeDescriptor::summary).collect();
        summaries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.identity.cmp(&b.identity)));
        summaries
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no descriptor is registered.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Drop every descriptor. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.descriptors.len();
        self.descriptors.clear();
        count
    }

    /// Baseline identity restored by retraction for records of `kind`.
    pub fn baseline_for(&self, kind: RecordKind) -> TypeIdentity {
        self.baselines
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| kind.default_baseline())
    }

    /// Override the baseline identity for records of `kind`.
    pub fn set_baseline(&mut self, kind: RecordKind, identity: TypeIdentity) {
        self.baselines.insert(kind, identity);
    }
}
