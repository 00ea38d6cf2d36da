//! OS-seeded entropy pool consumed by the algebraic modules.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use curvekit_corelib::context::Context;
use curvekit_corelib::diagnostics::ErrorKind;
use curvekit_corelib::subsystem::{Subsystem, SubsystemKind};

#[derive(Default)]
pub struct EntropySource {
    rng: Option<StdRng>,
    seed: [u8; 32],
}

impl EntropySource {
    /// Fill `buf` with pool output. Fails when called outside the
    /// init/clean window.
    pub fn fill(&mut self, buf: &mut [u8]) -> Result<(), ErrorKind> {
        match self.rng.as_mut() {
            Some(rng) => {
                rng.fill_bytes(buf);
                Ok(())
            }
            None => Err(ErrorKind::MissingConfiguration),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.rng.is_some()
    }
}

impl Subsystem for EntropySource {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Entropy
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        rand::rng().fill_bytes(&mut self.seed);
        self.rng = Some(StdRng::from_seed(self.seed));
        Ok(())
    }

    fn clean(&mut self, _ctx: &mut Context) {
        // Wipe the seed material along with the generator.
        self.seed = [0u8; 32];
        self.rng = None;
    }
}
