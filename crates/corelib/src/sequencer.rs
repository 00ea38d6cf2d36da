//! Lifecycle sequencer: brings the collaborator set up in dependency
//! order and tears it down in reverse.

use tracing::{debug, warn};

use crate::config::Config;
use crate::context::{Context, Status};
use crate::diagnostics::ErrorKind;
use crate::errors::InitError;
use crate::registry;
use crate::subsystem::{SubsystemKind, SubsystemSet};

/// Owned handle over an initialized library instance.
///
/// `initialize` is the only constructor, so a `Core` always refers to a
/// fully initialized context. Handles are independent of each other: a
/// second `initialize` builds a second context rather than re-entering a
/// shared one, which is why no double-init guard exists.
///
/// The context is not synchronized; share a `Core` across threads only
/// behind external locking, or give each thread its own.
pub struct Core {
    config: Config,
    ctx: Context,
    set: SubsystemSet,
    finished: bool,
}

impl Core {
    /// Initialize from the global factory registry.
    pub fn initialize(config: &Config) -> Result<Core, InitError> {
        config.validate()?;
        let set = registry::set_for_config(config)?;
        Self::initialize_with(config, set)
    }

    /// Initialize over an explicitly supplied collaborator set.
    ///
    /// Runs, in strict order: diagnostics-table construction (when
    /// enabled), architecture bootstrap, then the protected region —
    /// entropy source followed by each algebraic module in the declared
    /// dependency order. The first failure inside the protected region
    /// cleans every module that had completed init, in reverse order,
    /// and maps to a single `InitError`.
    pub fn initialize_with(config: &Config, mut set: SubsystemSet) -> Result<Core, InitError> {
        config.validate()?;
        set.sort_modules();

        let mut ctx = Context::new();
        ctx.set_trace_enabled(config.trace);

        if config.diagnostics {
            match (set.diagnostics_builder)() {
                Ok(table) => ctx.install_diagnostics(table),
                // Context still holds no table here, so a failed build
                // leaves no partial catalog behind.
                Err(kind) => return Err(InitError::Diagnostics(kind)),
            }
        }

        debug!("running architecture bootstrap");
        if let Err(kind) = set.bootstrap.init() {
            warn!(cause = %kind, "architecture bootstrap failed");
            ctx.raise(kind);
            ctx.set_status(Status::Error);
            return Err(InitError::Bootstrap(kind));
        }

        debug!("initializing entropy source");
        if let Err(kind) = set.entropy.init(&mut ctx) {
            warn!(cause = %kind, "entropy source failed to initialize");
            ctx.raise(kind);
            ctx.set_status(Status::Error);
            set.bootstrap.clean();
            return Err(InitError::Subsystem {
                kind: SubsystemKind::Entropy,
                cause: kind,
            });
        }

        let mut completed = 0;
        let mut failure = None;
        for module in set.modules.iter_mut() {
            let kind = module.kind();
            debug!(subsystem = %kind, "initializing subsystem");
            match module.init(&mut ctx) {
                Ok(()) => completed += 1,
                Err(cause) => {
                    failure = Some((kind, cause));
                    break;
                }
            }
        }

        if let Some((kind, cause)) = failure {
            warn!(subsystem = %kind, cause = %cause, "subsystem failed to initialize");
            ctx.raise(cause);
            ctx.set_status(Status::Error);
            for module in set.modules[..completed].iter_mut().rev() {
                debug!(subsystem = %module.kind(), "rolling back subsystem");
                module.clean(&mut ctx);
            }
            set.entropy.clean(&mut ctx);
            ctx.release_diagnostics();
            set.bootstrap.clean();
            return Err(InitError::Subsystem { kind, cause });
        }

        ctx.set_status(Status::Ok);
        debug!(modules = completed, "library initialized");
        Ok(Core {
            config: config.clone(),
            ctx,
            set,
            finished: false,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.ctx.status()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Kinds of the algebraic modules this handle sequenced, in init order.
    pub fn module_kinds(&self) -> Vec<SubsystemKind> {
        self.set.module_kinds()
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.ctx.last_error()
    }

    /// Tear the instance down: algebraic modules in reverse init order,
    /// then the entropy source, diagnostics release, and architecture
    /// clean. Best-effort, never fails. Also runs on drop.
    pub fn shutdown(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        for module in self.set.modules.iter_mut().rev() {
            debug!(subsystem = %module.kind(), "cleaning subsystem");
            module.clean(&mut self.ctx);
        }
        debug!("cleaning entropy source");
        self.set.entropy.clean(&mut self.ctx);
        self.ctx.clear_last_error();
        self.ctx.release_diagnostics();
        self.set.bootstrap.clean();
        self.ctx.reset();
        debug!("library torn down");
    }
}

impl std::fmt::Debug for Core {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Core")
            .field("config", &self.config)
            .field("status", &self.ctx.status())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl Drop for Core {
    fn drop(&mut self) {
        self.teardown();
    }
}
