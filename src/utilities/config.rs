//! Registry configuration.
//!
//! Settings can be built in code or loaded from YAML or JSON:
//!
//! ```yaml
//! empty_descriptor_policy: never_match
//! baselines:
//!   plain: record
//!   sequence: list
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};
use crate::identity::TypeIdentity;
use crate::record::RecordKind;

/// How membership treats a descriptor with no registered capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDescriptorPolicy {
    /// No requirements: every record satisfies the descriptor structurally.
    #[default]
    Vacuous,
    /// Only a nominal tag match counts.
    NeverMatch,
}

/// Baseline labels per record kind. Missing entries use the well-known
/// baselines from [`TypeIdentity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default)]
    pub plain: Option<String>,
    #[serde(default)]
    pub sequence: Option<String>,
}

/// Settings for a [`TypeRegistry`](crate::capabilities::TypeRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub empty_descriptor_policy: EmptyDescriptorPolicy,
    pub baselines: BaselineConfig,
}

impl RegistryConfig {
    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(TypeError::Config(format!(
                    "unsupported config file type: {}",
                    path.display()
                )))
            }
        };
        let content = std::fs::read_to_string(path)?;
        let config = parse(&content)?;
        log::debug!("Loaded registry config from {}", path.display());
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// The baseline identity explicitly configured for `kind`, if any.
    pub fn configured_baseline(&self, kind: RecordKind) -> Option<TypeIdentity> {
        let label = match kind {
            RecordKind::Plain => self.baselines.plain.as_ref(),
            RecordKind::Sequence => self.baselines.sequence.as_ref(),
        };
        label.map(TypeIdentity::named_baseline)
    }
}
