//! Builtin collaborators for the curvekit lifecycle core: the platform
//! probe, the entropy pool, and the algebraic subsystem set.

pub mod arch;
pub mod curves;
pub mod entropy;
pub mod fields;
pub mod pairings;

use std::sync::Once;

use curvekit_corelib::config::Config;
use curvekit_corelib::errors::RegistryError;
use curvekit_corelib::registry;
use curvekit_corelib::subsystem::{Subsystem, SubsystemKind, SubsystemSet};

use crate::arch::ArchBootstrap;
use crate::curves::{BinaryCurve, HyperellipticCurve, PrimeCurve};
use crate::entropy::EntropySource;
use crate::fields::{BinaryField, PrimeField, TernaryField};
use crate::pairings::{BinaryPairing, PrimePairing};

static INIT: Once = Once::new();

/// Helper used by embedders and tests to ensure the builtin factories
/// are available in the registry.
pub fn ensure_builtins_registered() {
    INIT.call_once(|| {
        let _ = register_builtins(); // ignore duplicate errors if any
    });
}

fn register_builtins() -> Result<(), RegistryError> {
    registry::register_bootstrap(|| Box::new(ArchBootstrap::default()))?;
    registry::register_subsystem(SubsystemKind::Entropy, || {
        Box::new(EntropySource::default())
    })?;
    for kind in SubsystemKind::ALGEBRAIC_ORDER {
        registry::register_subsystem(kind, builtin_factory(kind))?;
    }
    Ok(())
}

fn builtin_factory(kind: SubsystemKind) -> fn() -> Box<dyn Subsystem> {
    match kind {
        SubsystemKind::Entropy => || Box::new(EntropySource::default()),
        SubsystemKind::PrimeField => || Box::new(PrimeField::default()),
        SubsystemKind::BinaryField => || Box::new(BinaryField::default()),
        SubsystemKind::TernaryField => || Box::new(TernaryField::default()),
        SubsystemKind::PrimeCurve => || Box::new(PrimeCurve::default()),
        SubsystemKind::BinaryCurve => || Box::new(BinaryCurve::default()),
        SubsystemKind::HyperellipticCurve => || Box::new(HyperellipticCurve::default()),
        SubsystemKind::PairingPrime => || Box::new(PrimePairing::default()),
        SubsystemKind::PairingBinary => || Box::new(BinaryPairing::default()),
    }
}

/// Assemble a builtin collaborator set directly, without going through
/// the registry.
pub fn builtin_set(config: &Config) -> SubsystemSet {
    let mut set = SubsystemSet::new(
        Box::new(ArchBootstrap::default()),
        Box::new(EntropySource::default()),
    );
    for kind in config.enabled_kinds() {
        set = set.with_module(builtin_factory(kind)());
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_matches_enabled_kinds() {
        let config = Config {
            prime_field: true,
            prime_curve: true,
            pairing_prime: true,
            ..Config::default()
        };
        let set = builtin_set(&config);
        assert_eq!(
            set.module_kinds(),
            vec![
                SubsystemKind::PrimeField,
                SubsystemKind::PrimeCurve,
                SubsystemKind::PairingPrime,
            ]
        );
    }

    #[test]
    fn registration_is_idempotent() {
        ensure_builtins_registered();
        ensure_builtins_registered();
        let registered = registry::list_registered();
        assert!(registered.contains(&SubsystemKind::Entropy));
        assert!(registered.contains(&SubsystemKind::PairingBinary));
    }
}
