//! Platform probe backing the architecture bootstrap boundary.

use curvekit_corelib::diagnostics::ErrorKind;
use curvekit_corelib::subsystem::Bootstrap;

/// Snapshot of the platform facts the algebraic modules rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchInfo {
    pub word_bits: u32,
    pub little_endian: bool,
    pub target: &'static str,
}

impl ArchInfo {
    pub fn probe() -> Self {
        Self {
            word_bits: usize::BITS,
            little_endian: cfg!(target_endian = "little"),
            target: std::env::consts::ARCH,
        }
    }
}

#[derive(Debug, Default)]
pub struct ArchBootstrap {
    info: Option<ArchInfo>,
}

impl ArchBootstrap {
    /// Probe results, available between init and clean.
    pub fn info(&self) -> Option<ArchInfo> {
        self.info
    }
}

impl Bootstrap for ArchBootstrap {
    fn init(&mut self) -> Result<(), ErrorKind> {
        let info = ArchInfo::probe();
        // Limb arithmetic in the field modules assumes 32- or 64-bit words.
        if info.word_bits != 32 && info.word_bits != 64 {
            return Err(ErrorKind::InvalidValue);
        }
        self.info = Some(info);
        Ok(())
    }

    fn clean(&mut self) {
        self.info = None;
    }
}
