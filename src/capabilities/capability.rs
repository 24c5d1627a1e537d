//! Capability definition: a named callable that becomes a method-like member
//! of any record it is attached to.
//!
//! The callable is held behind an `Arc`, so cloning a [`Capability`] (which
//! is what extension does for every target) shares the same implementation
//! instead of copying it.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::record::Record;

/// Type alias for a capability body.
///
/// The first argument is the receiver record, the second the call arguments.
pub type CapabilityFn = Arc<dyn Fn(&Record, &[Value]) -> Result<Value> + Send + Sync>;

/// A callable with an optional own name.
#[derive(Clone)]
pub struct Capability {
    /// The callable's own name. `None` when it has no resolvable name.
    name: Option<String>,
    /// The implementation, shared between every record it is attached to.
    func: CapabilityFn,
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Capability(name='{}')", name),
            None => write!(f, "Capability(<anonymous>)"),
        }
    }
}

impl Capability {
    /// Create a capability that exposes its own name.
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Record, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// Create a capability with no name of its own.
    ///
    /// Anonymous capabilities can only be registered under an explicit key.
    pub fn anonymous<F>(func: F) -> Self
    where
        F: Fn(&Record, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Wrap an already shared body.
    pub fn from_fn(name: Option<String>, func: CapabilityFn) -> Self {
        Self { name, func }
    }

    /// The resolvable name, if any. Empty names do not resolve.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The shared body.
    pub fn func(&self) -> &CapabilityFn {
        &self.func
    }

    /// Run the body against `receiver`.
    pub fn invoke(&self, receiver: &Record, args: &[Value]) -> Result<Value> {
        (self.func)(receiver, args)
    }

    /// Whether both capabilities share the exact same body.
    pub fn same_callable(&self, other: &Capability) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}
