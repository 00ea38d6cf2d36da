//! Collaborator traits and the ordered subsystem set consumed by the
//! lifecycle sequencer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::diagnostics::{DiagnosticsTable, ErrorKind};

/// Identity of a collaborator module behind the init/clean boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsystemKind {
    Entropy,
    PrimeField,
    BinaryField,
    TernaryField,
    PrimeCurve,
    BinaryCurve,
    HyperellipticCurve,
    PairingPrime,
    PairingBinary,
}

impl SubsystemKind {
    /// Declared dependency order for the algebraic modules: fields before
    /// the curve groups built over them, curve groups before the pairing
    /// maps that operate on them.
    pub const ALGEBRAIC_ORDER: [SubsystemKind; 8] = [
        SubsystemKind::PrimeField,
        SubsystemKind::BinaryField,
        SubsystemKind::TernaryField,
        SubsystemKind::PrimeCurve,
        SubsystemKind::BinaryCurve,
        SubsystemKind::HyperellipticCurve,
        SubsystemKind::PairingPrime,
        SubsystemKind::PairingBinary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubsystemKind::Entropy => "entropy",
            SubsystemKind::PrimeField => "prime-field",
            SubsystemKind::BinaryField => "binary-field",
            SubsystemKind::TernaryField => "ternary-field",
            SubsystemKind::PrimeCurve => "prime-curve",
            SubsystemKind::BinaryCurve => "binary-curve",
            SubsystemKind::HyperellipticCurve => "hyperelliptic-curve",
            SubsystemKind::PairingPrime => "pairing-prime",
            SubsystemKind::PairingBinary => "pairing-binary",
        }
    }

    /// Position in the declared init order, `None` for the entropy source
    /// (sequenced separately, ahead of every algebraic module).
    pub fn algebraic_position(self) -> Option<usize> {
        Self::ALGEBRAIC_ORDER.iter().position(|&kind| kind == self)
    }
}

impl fmt::Display for SubsystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Architecture bootstrap boundary. Must succeed before anything else
/// runs; its clean closes the teardown sequence.
pub trait Bootstrap: Send + Sync {
    fn init(&mut self) -> Result<(), ErrorKind>;
    fn clean(&mut self);
}

/// Init/clean contract shared by the entropy source and every algebraic
/// module. `init` may read and write the runtime context; `clean` is
/// infallible by contract.
pub trait Subsystem: Send + Sync {
    fn kind(&self) -> SubsystemKind;
    fn init(&mut self, ctx: &mut Context) -> Result<(), ErrorKind>;
    fn clean(&mut self, ctx: &mut Context);
}

impl fmt::Debug for dyn Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subsystem").field(&self.kind()).finish()
    }
}

/// Fallible constructor for the diagnostics table. Overridable per set so
/// tests can inject allocation failure.
pub type DiagnosticsBuilder = fn() -> Result<DiagnosticsTable, ErrorKind>;

/// The full collaborator complement handed to the sequencer: bootstrap,
/// entropy source, and the enabled algebraic modules.
pub struct SubsystemSet {
    pub(crate) bootstrap: Box<dyn Bootstrap>,
    pub(crate) entropy: Box<dyn Subsystem>,
    pub(crate) modules: Vec<Box<dyn Subsystem>>,
    pub(crate) diagnostics_builder: DiagnosticsBuilder,
}

impl SubsystemSet {
    pub fn new(bootstrap: Box<dyn Bootstrap>, entropy: Box<dyn Subsystem>) -> Self {
        Self {
            bootstrap,
            entropy,
            modules: Vec::new(),
            diagnostics_builder: DiagnosticsTable::build,
        }
    }

    /// Add an algebraic module. Insertion order does not matter; the
    /// sequencer sorts the set into the declared dependency order.
    pub fn with_module(mut self, module: Box<dyn Subsystem>) -> Self {
        self.modules.push(module);
        self
    }

    pub fn with_diagnostics_builder(mut self, builder: DiagnosticsBuilder) -> Self {
        self.diagnostics_builder = builder;
        self
    }

    pub fn module_kinds(&self) -> Vec<SubsystemKind> {
        self.modules.iter().map(|module| module.kind()).collect()
    }

    pub(crate) fn sort_modules(&mut self) {
        self.modules
            .sort_by_key(|module| module.kind().algebraic_position().unwrap_or(usize::MAX));
    }
}
