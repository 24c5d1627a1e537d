//! # Type Registry
//!
//! Descriptors, the registry that holds them, and the four operations that
//! compose types onto records.
//!
//! ## Lifecycle
//!
//! 1. `TypeRegistry::define_type(&animal, [speak], ["name"], renamed)` registers
//!    capabilities and tracked properties under an identity
//! 2. `TypeRegistry::become_type(&mut record, &animal)` attaches the capabilities
//!    and tags the record
//! 3. `TypeRegistry::is_type(&record, &animal)` checks the tag, then falls back to
//!    capability presence
//! 4. `TypeRegistry::renounce_type(&mut record, &animal, None)` strips the
//!    capabilities and tracked properties and restores a baseline tag

pub mod capability;
pub mod definition;
pub mod descriptor;
pub mod extension;
pub mod membership;
pub mod registry;
pub mod retraction;

pub use capability::{Capability, CapabilityFn};
pub use definition::TypeDefinition;
pub use descriptor::{DescriptorSummary, TypeDescriptor};
pub use membership::{satisfies, Capable};
pub use registry::TypeRegistry;
