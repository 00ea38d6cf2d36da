//! Runtime enable-flags for the optional subsystems, with dependency
//! validation and TOML file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::subsystem::SubsystemKind;

/// Which optional pieces the sequencer brings up. Every flag defaults to
/// off; the architecture bootstrap and entropy source are always run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub diagnostics: bool,
    #[serde(default)]
    pub trace: bool,
    #[serde(default)]
    pub prime_field: bool,
    #[serde(default)]
    pub binary_field: bool,
    #[serde(default)]
    pub ternary_field: bool,
    #[serde(default)]
    pub prime_curve: bool,
    #[serde(default)]
    pub binary_curve: bool,
    #[serde(default)]
    pub hyperelliptic_curve: bool,
    #[serde(default)]
    pub pairing_prime: bool,
    #[serde(default)]
    pub pairing_binary: bool,
}

impl Config {
    /// Nothing optional enabled.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Every subsystem and both diagnostics and tracing enabled.
    pub fn all_enabled() -> Self {
        Self {
            diagnostics: true,
            trace: true,
            prime_field: true,
            binary_field: true,
            ternary_field: true,
            prime_curve: true,
            binary_curve: true,
            hyperelliptic_curve: true,
            pairing_prime: true,
            pairing_binary: true,
        }
    }

    /// Enforce the implicit enable-dependencies: a curve group needs its
    /// underlying field, a pairing map needs its underlying curve. The
    /// hyperelliptic group is built over the prime field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let deps = [
            (
                self.prime_curve,
                SubsystemKind::PrimeCurve,
                self.prime_field,
                SubsystemKind::PrimeField,
            ),
            (
                self.binary_curve,
                SubsystemKind::BinaryCurve,
                self.binary_field,
                SubsystemKind::BinaryField,
            ),
            (
                self.hyperelliptic_curve,
                SubsystemKind::HyperellipticCurve,
                self.prime_field,
                SubsystemKind::PrimeField,
            ),
            (
                self.pairing_prime,
                SubsystemKind::PairingPrime,
                self.prime_curve,
                SubsystemKind::PrimeCurve,
            ),
            (
                self.pairing_binary,
                SubsystemKind::PairingBinary,
                self.binary_curve,
                SubsystemKind::BinaryCurve,
            ),
        ];
        for (enabled, dependent, dep_enabled, required) in deps {
            if enabled && !dep_enabled {
                return Err(ConfigError::MissingDependency {
                    dependent,
                    required,
                });
            }
        }
        Ok(())
    }

    fn enabled(&self, kind: SubsystemKind) -> bool {
        match kind {
            SubsystemKind::Entropy => true,
            SubsystemKind::PrimeField => self.prime_field,
            SubsystemKind::BinaryField => self.binary_field,
            SubsystemKind::TernaryField => self.ternary_field,
            SubsystemKind::PrimeCurve => self.prime_curve,
            SubsystemKind::BinaryCurve => self.binary_curve,
            SubsystemKind::HyperellipticCurve => self.hyperelliptic_curve,
            SubsystemKind::PairingPrime => self.pairing_prime,
            SubsystemKind::PairingBinary => self.pairing_binary,
        }
    }

    /// The enabled algebraic modules, in the declared init order.
    pub fn enabled_kinds(&self) -> Vec<SubsystemKind> {
        SubsystemKind::ALGEBRAIC_ORDER
            .into_iter()
            .filter(|&kind| self.enabled(kind))
            .collect()
    }

    /// Load and validate a TOML config.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config =
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
