//! Ambient utilities: configuration loading and logger installation.

pub mod config;
pub mod logger;

pub use config::{BaselineConfig, EmptyDescriptorPolicy, RegistryConfig};
