//! Curvekit core: runtime context, configuration, and the lifecycle
//! sequencer that brings the algebraic subsystems up and down.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod errors;
pub mod registry;
pub mod sequencer;
pub mod subsystem;

pub use config::Config;
pub use context::{Context, Status};
pub use diagnostics::{DiagnosticsTable, ErrorKind};
pub use errors::{ConfigError, InitError, RegistryError};
pub use sequencer::Core;
pub use subsystem::{Bootstrap, Subsystem, SubsystemKind, SubsystemSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Public subsystem catalog entry for listing APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsystemInfo {
    pub kind: SubsystemKind,
    pub id: &'static str,
}

static DECLARED_SUBSYSTEMS: Lazy<Vec<SubsystemInfo>> = Lazy::new(|| {
    let mut infos = vec![SubsystemInfo {
        kind: SubsystemKind::Entropy,
        id: SubsystemKind::Entropy.label(),
    }];
    infos.extend(
        SubsystemKind::ALGEBRAIC_ORDER
            .into_iter()
            .map(|kind| SubsystemInfo {
                kind,
                id: kind.label(),
            }),
    );
    infos
});

/// API: list every declared subsystem, entropy first, then the algebraic
/// modules in init order.
pub fn list_subsystems() -> &'static [SubsystemInfo] {
    DECLARED_SUBSYSTEMS.as_slice()
}

/// Version helper for embedders.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
