//! Global collaborator factory registry (thread-safe).
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::config::Config;
use crate::errors::RegistryError;
use crate::subsystem::{Bootstrap, Subsystem, SubsystemKind, SubsystemSet};

pub type SubsystemFactory = fn() -> Box<dyn Subsystem>;
pub type BootstrapFactory = fn() -> Box<dyn Bootstrap>;

static SUBSYSTEMS: RwLock<BTreeMap<SubsystemKind, SubsystemFactory>> =
    RwLock::new(BTreeMap::new());
static BOOTSTRAP: RwLock<Option<BootstrapFactory>> = RwLock::new(None);

pub fn register_subsystem(
    kind: SubsystemKind,
    factory: SubsystemFactory,
) -> Result<(), RegistryError> {
    let mut guard = SUBSYSTEMS.write().expect("poisoned subsystem registry");
    if guard.contains_key(&kind) {
        return Err(RegistryError::DuplicateSubsystem(kind));
    }
    guard.insert(kind, factory);
    Ok(())
}

pub fn register_bootstrap(factory: BootstrapFactory) -> Result<(), RegistryError> {
    let mut guard = BOOTSTRAP.write().expect("poisoned bootstrap slot");
    if guard.is_some() {
        return Err(RegistryError::DuplicateBootstrap);
    }
    *guard = Some(factory);
    Ok(())
}

/// Construct a fresh instance of the registered subsystem for `kind`.
pub fn get_subsystem(kind: SubsystemKind) -> Result<Box<dyn Subsystem>, RegistryError> {
    let guard = SUBSYSTEMS.read().expect("poisoned subsystem registry");
    guard
        .get(&kind)
        .map(|factory| factory())
        .ok_or(RegistryError::SubsystemNotFound(kind))
}

pub fn get_bootstrap() -> Result<Box<dyn Bootstrap>, RegistryError> {
    let guard = BOOTSTRAP.read().expect("poisoned bootstrap slot");
    (*guard)
        .map(|factory| factory())
        .ok_or(RegistryError::MissingBootstrap)
}

pub fn list_registered() -> Vec<SubsystemKind> {
    let guard = SUBSYSTEMS.read().expect("poisoned subsystem registry");
    guard.keys().copied().collect()
}

/// Assemble the collaborator set for `config` from registered factories.
pub fn set_for_config(config: &Config) -> Result<SubsystemSet, RegistryError> {
    let bootstrap = get_bootstrap()?;
    let entropy = get_subsystem(SubsystemKind::Entropy)?;
    let mut set = SubsystemSet::new(bootstrap, entropy);
    for kind in config.enabled_kinds() {
        set = set.with_module(get_subsystem(kind)?);
    }
    Ok(set)
}
