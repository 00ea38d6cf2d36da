use thiserror::Error;

use crate::diagnostics::ErrorKind;
use crate::subsystem::SubsystemKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{dependent}' requires '{required}' to be enabled")]
    MissingDependency {
        dependent: SubsystemKind,
        required: SubsystemKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("subsystem '{0}' is already registered")]
    DuplicateSubsystem(SubsystemKind),
    #[error("subsystem '{0}' not found in registry")]
    SubsystemNotFound(SubsystemKind),
    #[error("an architecture bootstrap is already registered")]
    DuplicateBootstrap,
    #[error("no architecture bootstrap registered")]
    MissingBootstrap,
}

/// Failure of `Core::initialize`. Exactly one externally visible outcome
/// per failing cause; the originating diagnostic kind travels only through
/// the diagnostics channel when that is enabled.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("architecture bootstrap failed: {0}")]
    Bootstrap(ErrorKind),
    #[error("diagnostics table allocation failed: {0}")]
    Diagnostics(ErrorKind),
    #[error("subsystem '{kind}' failed to initialize: {cause}")]
    Subsystem {
        kind: SubsystemKind,
        cause: ErrorKind,
    },
}
