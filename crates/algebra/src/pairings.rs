//! Bilinear-pairing map setup over the prime and binary curve groups.

use curvekit_corelib::context::Context;
use curvekit_corelib::diagnostics::ErrorKind;
use curvekit_corelib::subsystem::{Subsystem, SubsystemKind};

/// Pairing flavor bookkeeping: which group the map runs over and the
/// embedding degree of its target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingPreset {
    pub id: &'static str,
    pub curve: &'static str,
    pub embedding_degree: u32,
}

// Optimal-ate over BN-style prime curves, eta_T over supersingular
// binary curves.
const PRIME_PAIRINGS: [PairingPreset; 1] = [PairingPreset {
    id: "ate-bn254",
    curve: "bn-254",
    embedding_degree: 12,
}];

const BINARY_PAIRINGS: [PairingPreset; 1] = [PairingPreset {
    id: "etat-b271",
    curve: "sb-271",
    embedding_degree: 4,
}];

pub const DEFAULT_PRIME_PAIRING: &str = "ate-bn254";
pub const DEFAULT_BINARY_PAIRING: &str = "etat-b271";

#[derive(Debug, Default)]
pub struct PrimePairing {
    preset_id: Option<&'static str>,
    preset: Option<&'static PairingPreset>,
}

impl PrimePairing {
    pub fn with_preset(id: &'static str) -> Self {
        Self {
            preset_id: Some(id),
            preset: None,
        }
    }

    pub fn preset(&self) -> Option<&'static PairingPreset> {
        self.preset
    }
}

impl Subsystem for PrimePairing {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::PairingPrime
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        let id = self.preset_id.unwrap_or(DEFAULT_PRIME_PAIRING);
        match PRIME_PAIRINGS.iter().find(|preset| preset.id == id) {
            Some(preset) => {
                self.preset = Some(preset);
                Ok(())
            }
            None => Err(ErrorKind::UnsupportedCurve),
        }
    }

    fn clean(&mut self, _ctx: &mut Context) {
        self.preset = None;
    }
}

#[derive(Debug, Default)]
pub struct BinaryPairing {
    preset_id: Option<&'static str>,
    preset: Option<&'static PairingPreset>,
}

impl BinaryPairing {
    pub fn with_preset(id: &'static str) -> Self {
        Self {
            preset_id: Some(id),
            preset: None,
        }
    }

    pub fn preset(&self) -> Option<&'static PairingPreset> {
        self.preset
    }
}

impl Subsystem for BinaryPairing {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::PairingBinary
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        let id = self.preset_id.unwrap_or(DEFAULT_BINARY_PAIRING);
        match BINARY_PAIRINGS.iter().find(|preset| preset.id == id) {
            Some(preset) => {
                self.preset = Some(preset);
                Ok(())
            }
            None => Err(ErrorKind::UnsupportedCurve),
        }
    }

    fn clean(&mut self, _ctx: &mut Context) {
        self.preset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_pairing_has_embedding_degree_twelve() {
        let mut ctx = Context::new();
        let mut pairing = PrimePairing::default();
        pairing.init(&mut ctx).expect("prime pairing init");
        assert_eq!(pairing.preset().unwrap().embedding_degree, 12);
    }

    #[test]
    fn binary_pairing_round_trip() {
        let mut ctx = Context::new();
        let mut pairing = BinaryPairing::default();
        pairing.init(&mut ctx).expect("binary pairing init");
        assert_eq!(pairing.preset().unwrap().embedding_degree, 4);
        pairing.clean(&mut ctx);
        assert!(pairing.preset().is_none());
    }

    #[test]
    fn unknown_pairing_preset_is_unsupported() {
        let mut ctx = Context::new();
        let mut pairing = PrimePairing::with_preset("ate-bls381");
        assert_eq!(
            pairing.init(&mut ctx).unwrap_err(),
            ErrorKind::UnsupportedCurve
        );
    }
}
