//! Field parameter setup: prime, binary, and ternary flavors.
//!
//! Init computes and caches the parameters each arithmetic module works
//! over; the heavy arithmetic itself lives behind this boundary.

use num_bigint::BigUint;

use curvekit_corelib::context::Context;
use curvekit_corelib::diagnostics::ErrorKind;
use curvekit_corelib::subsystem::{Subsystem, SubsystemKind};

/// Widest prime modulus the limb schedule supports.
const MAX_PRIME_BITS: u64 = 1024;

/// Default prime modulus: 2^255 - 19.
pub fn default_prime_modulus() -> BigUint {
    BigUint::from(2u32).pow(255) - BigUint::from(19u32)
}

#[derive(Debug, Default)]
pub struct PrimeField {
    modulus: Option<BigUint>,
    bits: u64,
}

impl PrimeField {
    pub fn modulus(&self) -> Option<&BigUint> {
        self.modulus.as_ref()
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }
}

impl Subsystem for PrimeField {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::PrimeField
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        let modulus = default_prime_modulus();
        let bits = modulus.bits();
        if bits > MAX_PRIME_BITS {
            return Err(ErrorKind::UnsupportedField);
        }
        self.bits = bits;
        self.modulus = Some(modulus);
        Ok(())
    }

    fn clean(&mut self, _ctx: &mut Context) {
        self.modulus = None;
        self.bits = 0;
    }
}

/// Irreducible polynomial for GF(2^m), given as descending term exponents.
/// NIST-standard trinomials and pentanomials.
fn binary_irreducible(degree: u32) -> Option<&'static [u32]> {
    match degree {
        163 => Some(&[163, 7, 6, 3, 0]),
        233 => Some(&[233, 74, 0]),
        283 => Some(&[283, 12, 7, 5, 0]),
        409 => Some(&[409, 87, 0]),
        571 => Some(&[571, 10, 5, 2, 0]),
        _ => None,
    }
}

pub const DEFAULT_BINARY_DEGREE: u32 = 283;

#[derive(Debug, Default)]
pub struct BinaryField {
    degree: u32,
    poly: Option<&'static [u32]>,
}

impl BinaryField {
    pub fn with_degree(degree: u32) -> Self {
        Self { degree, poly: None }
    }

    pub fn polynomial(&self) -> Option<&'static [u32]> {
        self.poly
    }
}

impl Subsystem for BinaryField {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::BinaryField
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        if self.degree == 0 {
            self.degree = DEFAULT_BINARY_DEGREE;
        }
        match binary_irreducible(self.degree) {
            Some(poly) => {
                self.poly = Some(poly);
                Ok(())
            }
            None => Err(ErrorKind::UnsupportedField),
        }
    }

    fn clean(&mut self, _ctx: &mut Context) {
        self.poly = None;
    }
}

/// Irreducible trinomial x^m + a*x^k + b over GF(3), as (m, k).
fn ternary_trinomial(degree: u32) -> Option<(u32, u32)> {
    match degree {
        97 => Some((97, 12)),
        239 => Some((239, 24)),
        509 => Some((509, 318)),
        _ => None,
    }
}

pub const DEFAULT_TERNARY_DEGREE: u32 = 239;

#[derive(Debug, Default)]
pub struct TernaryField {
    degree: u32,
    trinomial: Option<(u32, u32)>,
}

impl TernaryField {
    pub fn with_degree(degree: u32) -> Self {
        Self {
            degree,
            trinomial: None,
        }
    }

    pub fn trinomial(&self) -> Option<(u32, u32)> {
        self.trinomial
    }
}

impl Subsystem for TernaryField {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::TernaryField
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        if self.degree == 0 {
            self.degree = DEFAULT_TERNARY_DEGREE;
        }
        match ternary_trinomial(self.degree) {
            Some(trinomial) => {
                self.trinomial = Some(trinomial);
                Ok(())
            }
            None => Err(ErrorKind::UnsupportedField),
        }
    }

    fn clean(&mut self, _ctx: &mut Context) {
        self.trinomial = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_modulus_is_255_bits() {
        let p = default_prime_modulus();
        assert_eq!(p.bits(), 255);
    }

    #[test]
    fn prime_field_init_caches_modulus() {
        let mut ctx = Context::new();
        let mut field = PrimeField::default();
        field.init(&mut ctx).expect("prime field init");
        assert_eq!(field.bits(), 255);
        field.clean(&mut ctx);
        assert!(field.modulus().is_none());
    }

    #[test]
    fn binary_field_default_degree_is_supported() {
        let mut ctx = Context::new();
        let mut field = BinaryField::default();
        field.init(&mut ctx).expect("binary field init");
        let poly = field.polynomial().unwrap();
        assert_eq!(poly[0], DEFAULT_BINARY_DEGREE);
        assert_eq!(*poly.last().unwrap(), 0);
    }

    #[test]
    fn unsupported_binary_degree_is_rejected() {
        let mut ctx = Context::new();
        let mut field = BinaryField::with_degree(100);
        assert_eq!(
            field.init(&mut ctx).unwrap_err(),
            ErrorKind::UnsupportedField
        );
    }

    #[test]
    fn ternary_field_round_trip() {
        let mut ctx = Context::new();
        let mut field = TernaryField::default();
        field.init(&mut ctx).expect("ternary field init");
        assert_eq!(field.trinomial(), Some((239, 24)));
        field.clean(&mut ctx);
        assert!(field.trinomial().is_none());
    }
}
