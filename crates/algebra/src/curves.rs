//! Curve-group parameter presets over the prime and binary fields.

use num_bigint::BigUint;
use num_traits::Num;

use curvekit_corelib::context::Context;
use curvekit_corelib::diagnostics::ErrorKind;
use curvekit_corelib::subsystem::{Subsystem, SubsystemKind};

/// Short-Weierstrass preset y^2 = x^3 + ax + b over GF(p), hex-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeCurvePreset {
    pub id: &'static str,
    pub p: &'static str,
    pub a: &'static str,
    pub b: &'static str,
}

// NIST P-256 and P-384 domain parameters.
const PRIME_PRESETS: [PrimeCurvePreset; 2] = [
    PrimeCurvePreset {
        id: "p-256",
        p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
        b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    },
    PrimeCurvePreset {
        id: "p-384",
        p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
            ffffffff0000000000000000ffffffff",
        a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe\
            ffffffff0000000000000000fffffffc",
        b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a\
            c656398d8a2ed19d2a85c8edd3ec2aef",
    },
];

fn prime_preset(id: &str) -> Option<&'static PrimeCurvePreset> {
    PRIME_PRESETS.iter().find(|preset| preset.id == id)
}

pub const DEFAULT_PRIME_CURVE: &str = "p-256";

/// Materialized prime-curve parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeCurveParams {
    pub id: &'static str,
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
}

#[derive(Debug, Default)]
pub struct PrimeCurve {
    preset_id: Option<&'static str>,
    params: Option<PrimeCurveParams>,
}

impl PrimeCurve {
    pub fn with_preset(id: &'static str) -> Self {
        Self {
            preset_id: Some(id),
            params: None,
        }
    }

    pub fn params(&self) -> Option<&PrimeCurveParams> {
        self.params.as_ref()
    }
}

impl Subsystem for PrimeCurve {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::PrimeCurve
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        let id = self.preset_id.unwrap_or(DEFAULT_PRIME_CURVE);
        let preset = prime_preset(id).ok_or(ErrorKind::UnsupportedCurve)?;
        let parse = |hex: &str| {
            BigUint::from_str_radix(hex, 16).map_err(|_| ErrorKind::InvalidValue)
        };
        self.params = Some(PrimeCurveParams {
            id: preset.id,
            p: parse(preset.p)?,
            a: parse(preset.a)?,
            b: parse(preset.b)?,
        });
        Ok(())
    }

    fn clean(&mut self, _ctx: &mut Context) {
        self.params = None;
    }
}

/// Koblitz/random binary-curve presets over GF(2^m).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryCurvePreset {
    pub id: &'static str,
    pub degree: u32,
    pub a: u8,
}

const BINARY_PRESETS: [BinaryCurvePreset; 3] = [
    BinaryCurvePreset {
        id: "k-163",
        degree: 163,
        a: 1,
    },
    BinaryCurvePreset {
        id: "b-283",
        degree: 283,
        a: 1,
    },
    BinaryCurvePreset {
        id: "k-571",
        degree: 571,
        a: 0,
    },
];

pub const DEFAULT_BINARY_CURVE: &str = "b-283";

#[derive(Debug, Default)]
pub struct BinaryCurve {
    preset_id: Option<&'static str>,
    preset: Option<&'static BinaryCurvePreset>,
}

impl BinaryCurve {
    pub fn with_preset(id: &'static str) -> Self {
        Self {
            preset_id: Some(id),
            preset: None,
        }
    }

    pub fn preset(&self) -> Option<&'static BinaryCurvePreset> {
        self.preset
    }
}

impl Subsystem for BinaryCurve {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::BinaryCurve
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        let id = self.preset_id.unwrap_or(DEFAULT_BINARY_CURVE);
        match BINARY_PRESETS.iter().find(|preset| preset.id == id) {
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

/// Genus-2 hyperelliptic presets over the prime field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyperellipticPreset {
    pub id: &'static str,
    pub genus: u32,
    pub field_bits: u32,
}

const HYPERELLIPTIC_PRESETS: [HyperellipticPreset; 2] = [
    HyperellipticPreset {
        id: "hc-127",
        genus: 2,
        field_bits: 127,
    },
    HyperellipticPreset {
        id: "hc-256",
        genus: 2,
        field_bits: 256,
    },
];

pub const DEFAULT_HYPERELLIPTIC_CURVE: &str = "hc-127";

#[derive(Debug, Default)]
pub struct HyperellipticCurve {
    preset_id: Option<&'static str>,
    preset: Option<&'static HyperellipticPreset>,
}

impl HyperellipticCurve {
    pub fn with_preset(id: &'static str) -> Self {
        Self {
            preset_id: Some(id),
            preset: None,
        }
    }

    pub fn preset(&self) -> Option<&'static HyperellipticPreset> {
        self.preset
    }
}

impl Subsystem for HyperellipticCurve {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::HyperellipticCurve
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        let id = self.preset_id.unwrap_or(DEFAULT_HYPERELLIPTIC_CURVE);
        match HYPERELLIPTIC_PRESETS.iter().find(|preset| preset.id == id) {
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
