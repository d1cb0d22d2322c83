//! Feature map kinds and their configuration schemas.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_DEPTH;
use crate::error::EncodeError;

/// The available feature map strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureMapKind {
    /// Single-qubit rotations only.
    FirstOrderExpansion,
    /// Single-qubit rotations followed by pairwise ZZ-style entanglers.
    SecondOrderExpansion,
}

impl FeatureMapKind {
    /// All kinds, in registration order.
    pub const ALL: [FeatureMapKind; 2] = [
        FeatureMapKind::FirstOrderExpansion,
        FeatureMapKind::SecondOrderExpansion,
    ];

    /// Registered name.
    pub fn name(self) -> &'static str {
        match self {
            FeatureMapKind::FirstOrderExpansion => "FirstOrderExpansion",
            FeatureMapKind::SecondOrderExpansion => "SecondOrderExpansion",
        }
    }

    /// Name of the composite gate a feature map of this kind emits.
    pub fn gate_name(self) -> &'static str {
        match self {
            FeatureMapKind::FirstOrderExpansion => "first_order_expansion",
            FeatureMapKind::SecondOrderExpansion => "second_order_expansion",
        }
    }

    /// Registration record: name, description and options schema.
    pub fn descriptor(self) -> FeatureMapDescriptor {
        match self {
            FeatureMapKind::FirstOrderExpansion => FeatureMapDescriptor {
                name: self.name().to_string(),
                description: "First order expansion for feature map".to_string(),
                input_schema: json!({
                    "$schema": "http://json-schema.org/schema#",
                    "id": "First_Order_Expansion_schema",
                    "type": "object",
                    "properties": {
                        "depth": {
                            "type": "integer",
                            "default": DEFAULT_DEPTH,
                            "minimum": 1
                        }
                    },
                    "additionalProperties": false
                }),
            },
            FeatureMapKind::SecondOrderExpansion => FeatureMapDescriptor {
                name: self.name().to_string(),
                description: "Second order expansion for feature map".to_string(),
                input_schema: json!({
                    "$schema": "http://json-schema.org/schema#",
                    "id": "Second_Order_Expansion_schema",
                    "type": "object",
                    "properties": {
                        "depth": {
                            "type": "integer",
                            "default": DEFAULT_DEPTH,
                            "minimum": 1
                        },
                        "entangler_map": {
                            "type": ["object", "null"],
                            "default": null
                        },
                        "entanglement": {
                            "type": "string",
                            "default": "full",
                            "enum": ["full", "linear"]
                        }
                    },
                    "additionalProperties": false
                }),
            },
        }
    }
}

impl fmt::Display for FeatureMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureMapKind {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "firstorderexpansion" | "firstorder" => Ok(FeatureMapKind::FirstOrderExpansion),
            "secondorderexpansion" | "secondorder" => Ok(FeatureMapKind::SecondOrderExpansion),
            _ => Err(EncodeError::config(format!("unknown feature map '{s}'"))),
        }
    }
}

/// Name, description and JSON schema of a feature map's options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMapDescriptor {
    /// Registered name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// JSON schema of the accepted options.
    pub input_schema: Value,
}
