//! # retrotype
//!
//! Runtime type composition for structural records.
//!
//! A type is an opaque [`TypeIdentity`] with a descriptor of named
//! capabilities (callables) and tracked property names. Any [`Record`], however
//! it was built, can become an instance of a type after the fact, be tested
//! against it nominally or by duck typing, and renounce it again.
//!
//! ```ignore
//! let mut registry = TypeRegistry::new();
//! let animal = TypeIdentity::new("Animal");
//! registry.define(
//!     &animal,
//!     TypeDefinition::new()
//!         .function(Capability::named("speak", |_, _| Ok(json!("..."))))
//!         .property("name"),
//! )?;
//!
//! let mut rex = Record::new().with("name", "Rex");
//! registry.become_type(&mut rex, &animal);
//! assert!(registry.is_type(&rex, &animal));
//! registry.renounce_type(&mut rex, &animal, None);
//! ```

pub mod capabilities;
pub mod error;
pub mod global;
pub mod identity;
pub mod instance;
pub mod record;
pub mod utilities;

pub use capabilities::{
    satisfies, Capability, CapabilityFn, Capable, DescriptorSummary, TypeDefinition,
    TypeDescriptor, TypeRegistry,
};
pub use error::{Result, TypeError};
pub use identity::TypeIdentity;
pub use instance::{Instance, MethodTable};
pub use record::{Field, Record, RecordKind};
pub use utilities::config::{EmptyDescriptorPolicy, RegistryConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
