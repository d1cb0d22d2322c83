//! Feature map configuration.
//!
//! Supports building a configuration:
//! 1. Directly, via [`FeatureMapConfig::new`]
//! 2. From a document (YAML or JSON) naming the strategy and its options
//! 3. With environment overrides (`QFM_` prefix) on top of a document
//!
//! Options are validated against the strategy's schema: unknown keys are
//! rejected and `depth` must be at least 1.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::entanglement::{Entanglement, EntanglerMap};
use crate::error::{EncodeError, EncodeResult};
use crate::schema::FeatureMapKind;

/// Number of encoding rounds when none is configured.
pub const DEFAULT_DEPTH: u32 = 2;

/// Environment variable overriding `depth`.
pub const DEPTH_ENV_VAR: &str = "QFM_DEPTH";

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

/// Qubit count and depth shared by every feature map. Immutable once built.
///
/// Deserialization goes through [`FeatureMapConfig::new`], so a stored
/// config with a zero field is rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureMapConfig")]
pub struct FeatureMapConfig {
    num_qubits: u32,
    depth: u32,
}

/// Unchecked wire form of [`FeatureMapConfig`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFeatureMapConfig {
    num_qubits: u32,
    depth: u32,
}

impl TryFrom<RawFeatureMapConfig> for FeatureMapConfig {
    type Error = EncodeError;

    fn try_from(raw: RawFeatureMapConfig) -> EncodeResult<Self> {
        Self::new(raw.num_qubits, raw.depth)
    }
}

impl FeatureMapConfig {
    /// Create a validated configuration.
    pub fn new(num_qubits: u32, depth: u32) -> EncodeResult<Self> {
        let config = Self { num_qubits, depth };
        config.validate()?;
        Ok(config)
    }

    /// Create a validated configuration with [`DEFAULT_DEPTH`].
    pub fn with_default_depth(num_qubits: u32) -> EncodeResult<Self> {
        Self::new(num_qubits, DEFAULT_DEPTH)
    }

    /// Check both fields are at least 1.
    pub fn validate(&self) -> EncodeResult<()> {
        if self.num_qubits < 1 {
            return Err(EncodeError::config("num_qubits must be at least 1"));
        }
        if self.depth < 1 {
            return Err(EncodeError::config(format!(
                "depth must be at least 1, got {}",
                self.depth
            )));
        }
        Ok(())
    }

    /// Number of qubits, equal to the data dimension.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of encoding rounds.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Options accepted by the first-order expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirstOrderOptions {
    /// Number of encoding rounds.
    #[serde(default = "default_depth")]
    pub depth: u32,
}

impl Default for FirstOrderOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Options accepted by the second-order expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecondOrderOptions {
    /// Number of encoding rounds.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Built-in pattern, used when no explicit map is given.
    #[serde(default)]
    pub entanglement: Entanglement,
    /// Explicit source → targets map.
    #[serde(default)]
    pub entangler_map: Option<EntanglerMap>,
}

impl Default for SecondOrderOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            entanglement: Entanglement::default(),
            entangler_map: None,
        }
    }
}

/// A complete feature map description as found in a config file.
///
/// ```yaml
/// name: SecondOrderExpansion
/// num_qubits: 3
/// options:
///   depth: 1
///   entanglement: linear
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureMapDocument {
    /// Which strategy to build.
    pub name: FeatureMapKind,
    /// Number of qubits.
    pub num_qubits: u32,
    /// Strategy options, checked against the strategy's schema.
    #[serde(default)]
    pub options: Value,
}

impl FeatureMapDocument {
    /// A document with default options.
    pub fn new(name: FeatureMapKind, num_qubits: u32) -> Self {
        Self {
            name,
            num_qubits,
            options: Value::Object(Map::new()),
        }
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(s: &str) -> EncodeResult<Self> {
        serde_yaml_ng::from_str(s)
            .map_err(|e| EncodeError::config(format!("invalid YAML feature map: {e}")))
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> EncodeResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| EncodeError::config(format!("invalid JSON feature map: {e}")))
    }

    /// Load a document from disk. `.json` files are read as JSON, anything
    /// else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> EncodeResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| EncodeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }

    /// Set a single option, replacing any previous value.
    pub fn set_option(&mut self, key: &str, value: impl Into<Value>) -> EncodeResult<()> {
        if self.options.is_null() {
            self.options = Value::Object(Map::new());
        }
        match self.options.as_object_mut() {
            Some(map) => {
                map.insert(key.to_string(), value.into());
                Ok(())
            }
            None => Err(EncodeError::config("options must be a mapping")),
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> EncodeResult<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> EncodeResult<()> {
        if let Some(raw) = lookup(DEPTH_ENV_VAR) {
            let depth: u32 = raw.trim().parse().map_err(|_| {
                EncodeError::config(format!("{DEPTH_ENV_VAR} must be a positive integer, got '{raw}'"))
            })?;
            self.set_option("depth", depth)?;
        }
        Ok(())
    }

    /// Options as first-order options.
    pub fn first_order_options(&self) -> EncodeResult<FirstOrderOptions> {
        self.parse_options()
    }

    /// Options as second-order options.
    pub fn second_order_options(&self) -> EncodeResult<SecondOrderOptions> {
        self.parse_options()
    }

    fn parse_options<T: serde::de::DeserializeOwned>(&self) -> EncodeResult<T> {
        let options = if self.options.is_null() {
            Value::Object(Map::new())
        } else {
            self.options.clone()
        };
        serde_json::from_value(options)
            .map_err(|e| EncodeError::config(format!("{} options: {e}", self.name)))
    }
}
