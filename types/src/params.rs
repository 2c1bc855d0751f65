//! Protocol parameters — operational limits enforced at request admission.
//!
//! The field modulus and hash constructions are compile-time protocol
//! constants and deliberately not configurable; these parameters cover only
//! the values an operator of the system may reasonably tune.

use serde::{Deserialize, Serialize};

/// Tunable limits applied when a randomness request is admitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolParams {
    /// Upper bound on the callback resource budget a requester may reserve.
    #[serde(default = "default_max_callback_budget")]
    pub max_callback_budget: u32,

    /// Upper bound on the confirmation depth a requester may demand.
    /// Prevents requests that could never be fulfilled within the hash
    /// retention horizon of a poorly provisioned historian.
    #[serde(default = "default_max_min_confirmations")]
    pub max_min_confirmations: u16,

    /// Lower bound on confirmation depth. Zero-confirmation requests are
    /// fulfillable in the same log position they were created in, which
    /// defeats the reordering resistance the depth exists for.
    #[serde(default = "default_min_min_confirmations")]
    pub min_min_confirmations: u16,
}

fn default_max_callback_budget() -> u32 {
    10_000_000
}

fn default_max_min_confirmations() -> u16 {
    72
}

fn default_min_min_confirmations() -> u16 {
    1
}

impl ProtocolParams {
    /// The intended live configuration.
    pub fn zkrand_defaults() -> Self {
        Self {
            max_callback_budget: default_max_callback_budget(),
            max_min_confirmations: default_max_min_confirmations(),
            min_min_confirmations: default_min_min_confirmations(),
        }
    }

    /// Parse parameters from TOML, falling back to defaults for absent keys.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self::zkrand_defaults()
    }
}
