//! Builder for the inputs of [`TypeRegistry::define_type`].
//!
//! [`TypeRegistry::define_type`]: super::registry::TypeRegistry::define_type

use super::capability::Capability;

/// Collected capabilities and property names for one registration call.
///
/// # Example
///
/// ```ignore
/// let def = TypeDefinition::new()
///     .function(Capability::named("speak", |_, _| Ok(json!("..."))))
///     .property("name")
///     .renamed("talk", Capability::anonymous(|_, _| Ok(json!("hi"))));
/// registry.define(&animal, def)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeDefinition {
    pub(crate) named_fns: Vec<Capability>,
    pub(crate) prop_names: Vec<String>,
    pub(crate) renamed_fns: Vec<(String, Capability)>,
}

impl TypeDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a capability registered under its own name.
    pub fn function(mut self, cap: Capability) -> Self {
        self.named_fns.push(cap);
        self
    }

    /// Add several capabilities registered under their own names.
    pub fn functions(mut self, caps: impl IntoIterator<Item = Capability>) -> Self {
        self.named_fns.extend(caps);
        self
    }

    /// Track a property name.
    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.prop_names.push(name.into());
        self
    }

    /// Track several property names.
    pub fn properties<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.prop_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a capability registered under an explicit key.
    pub fn renamed(mut self, name: impl Into<String>, cap: Capability) -> Self {
        self.renamed_fns.push((name.into(), cap));
        self
    }
}
