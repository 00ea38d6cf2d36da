//! Lifecycle sequencing over scripted collaborator doubles.

use std::sync::{Arc, Mutex};

use curvekit_corelib::{
    Bootstrap, Config, Context, Core, ErrorKind, InitError, Status, Subsystem, SubsystemKind,
    SubsystemSet,
};

#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct ScriptedBootstrap {
    log: CallLog,
    fail: bool,
}

impl ScriptedBootstrap {
    fn new(log: &CallLog) -> Box<Self> {
        Box::new(Self {
            log: log.clone(),
            fail: false,
        })
    }

    fn failing(log: &CallLog) -> Box<Self> {
        Box::new(Self {
            log: log.clone(),
            fail: true,
        })
    }
}

impl Bootstrap for ScriptedBootstrap {
    fn init(&mut self) -> Result<(), ErrorKind> {
        self.log.push("bootstrap.init");
        if self.fail {
            Err(ErrorKind::InvalidValue)
        } else {
            Ok(())
        }
    }

    fn clean(&mut self) {
        self.log.push("bootstrap.clean");
    }
}

struct ScriptedSubsystem {
    kind: SubsystemKind,
    log: CallLog,
    fail: bool,
}

impl ScriptedSubsystem {
    fn new(kind: SubsystemKind, log: &CallLog) -> Box<Self> {
        Box::new(Self {
            kind,
            log: log.clone(),
            fail: false,
        })
    }

    fn failing(kind: SubsystemKind, log: &CallLog) -> Box<Self> {
        Box::new(Self {
            kind,
            log: log.clone(),
            fail: true,
        })
    }
}

impl Subsystem for ScriptedSubsystem {
    fn kind(&self) -> SubsystemKind {
        self.kind
    }

    fn init(&mut self, _ctx: &mut Context) -> Result<(), ErrorKind> {
        self.log.push(format!("{}.init", self.kind));
        if self.fail {
            Err(ErrorKind::UnsupportedField)
        } else {
            Ok(())
        }
    }

    fn clean(&mut self, _ctx: &mut Context) {
        self.log.push(format!("{}.clean", self.kind));
    }
}

fn scripted_set(log: &CallLog) -> SubsystemSet {
    SubsystemSet::new(
        ScriptedBootstrap::new(log),
        ScriptedSubsystem::new(SubsystemKind::Entropy, log),
    )
}

#[test]
fn baseline_init_and_teardown_succeed() {
    let log = CallLog::default();
    let core = Core::initialize_with(&Config::minimal(), scripted_set(&log)).expect("initialize");
    assert_eq!(core.status(), Status::Ok);
    core.shutdown();
    assert_eq!(
        log.entries(),
        vec![
            "bootstrap.init",
            "entropy.init",
            "entropy.clean",
            "bootstrap.clean",
        ]
    );
}

#[test]
fn bootstrap_failure_gates_everything_else() {
    let log = CallLog::default();
    let set = SubsystemSet::new(
        ScriptedBootstrap::failing(&log),
        ScriptedSubsystem::new(SubsystemKind::Entropy, &log),
    )
    .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeField, &log));

    let config = Config {
        prime_field: true,
        ..Config::default()
    };
    let err = Core::initialize_with(&config, set).unwrap_err();
    assert!(matches!(err, InitError::Bootstrap(ErrorKind::InvalidValue)));
    // Nothing past the bootstrap may run.
    assert_eq!(log.entries(), vec!["bootstrap.init"]);
}

#[test]
fn modules_initialize_in_declared_order() {
    let log = CallLog::default();
    // Insert in scrambled order; the sequencer must still run fields
    // before curves before pairings.
    let set = scripted_set(&log)
        .with_module(ScriptedSubsystem::new(SubsystemKind::PairingBinary, &log))
        .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeCurve, &log))
        .with_module(ScriptedSubsystem::new(SubsystemKind::TernaryField, &log))
        .with_module(ScriptedSubsystem::new(SubsystemKind::BinaryCurve, &log))
        .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeField, &log))
        .with_module(ScriptedSubsystem::new(
            SubsystemKind::HyperellipticCurve,
            &log,
        ))
        .with_module(ScriptedSubsystem::new(SubsystemKind::PairingPrime, &log))
        .with_module(ScriptedSubsystem::new(SubsystemKind::BinaryField, &log));

    let core = Core::initialize_with(&Config::all_enabled(), set).expect("initialize");
    assert_eq!(
        log.entries(),
        vec![
            "bootstrap.init",
            "entropy.init",
            "prime-field.init",
            "binary-field.init",
            "ternary-field.init",
            "prime-curve.init",
            "binary-curve.init",
            "hyperelliptic-curve.init",
            "pairing-prime.init",
            "pairing-binary.init",
        ]
    );
    core.shutdown();
}

#[test]
fn mid_sequence_failure_unwinds_completed_inits_only() {
    let log = CallLog::default();
    let set = scripted_set(&log)
        .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeField, &log))
        .with_module(ScriptedSubsystem::failing(SubsystemKind::BinaryField, &log))
        .with_module(ScriptedSubsystem::new(SubsystemKind::TernaryField, &log));

    let config = Config {
        prime_field: true,
        binary_field: true,
        ternary_field: true,
        ..Config::default()
    };
    let err = Core::initialize_with(&config, set).unwrap_err();
    assert!(matches!(
        err,
        InitError::Subsystem {
            kind: SubsystemKind::BinaryField,
            cause: ErrorKind::UnsupportedField,
        }
    ));
    // The failing module and everything after it are never cleaned; the
    // completed modules unwind in reverse order.
    assert_eq!(
        log.entries(),
        vec![
            "bootstrap.init",
            "entropy.init",
            "prime-field.init",
            "binary-field.init",
            "prime-field.clean",
            "entropy.clean",
            "bootstrap.clean",
        ]
    );
}

#[test]
fn entropy_failure_is_propagated() {
    let log = CallLog::default();
    let set = SubsystemSet::new(
        ScriptedBootstrap::new(&log),
        ScriptedSubsystem::failing(SubsystemKind::Entropy, &log),
    )
    .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeField, &log));

    let config = Config {
        prime_field: true,
        ..Config::default()
    };
    let err = Core::initialize_with(&config, set).unwrap_err();
    assert!(matches!(
        err,
        InitError::Subsystem {
            kind: SubsystemKind::Entropy,
            ..
        }
    ));
    assert_eq!(
        log.entries(),
        vec!["bootstrap.init", "entropy.init", "bootstrap.clean"]
    );
}

#[test]
fn scenario_prime_field_and_curve() {
    let log = CallLog::default();
    let set = scripted_set(&log)
        .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeField, &log))
        .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeCurve, &log));

    let config = Config {
        prime_field: true,
        prime_curve: true,
        ..Config::default()
    };
    let core = Core::initialize_with(&config, set).expect("initialize");
    assert_eq!(
        log.entries(),
        vec![
            "bootstrap.init",
            "entropy.init",
            "prime-field.init",
            "prime-curve.init",
        ]
    );

    core.shutdown();
    assert_eq!(
        log.entries()[4..],
        [
            "prime-curve.clean",
            "prime-field.clean",
            "entropy.clean",
            "bootstrap.clean",
        ]
    );
}

#[test]
fn invalid_config_is_rejected_before_any_init() {
    let log = CallLog::default();
    let config = Config {
        prime_curve: true,
        ..Config::default()
    };
    let err = Core::initialize_with(&config, scripted_set(&log)).unwrap_err();
    assert!(matches!(err, InitError::Config(_)));
    assert!(log.entries().is_empty());
}

#[test]
fn dropping_a_core_tears_it_down() {
    let log = CallLog::default();
    let set = scripted_set(&log)
        .with_module(ScriptedSubsystem::new(SubsystemKind::PrimeField, &log));
    let config = Config {
        prime_field: true,
        ..Config::default()
    };
    {
        let _core = Core::initialize_with(&config, set).expect("initialize");
    }
    assert_eq!(
        log.entries(),
        vec![
            "bootstrap.init",
            "entropy.init",
            "prime-field.init",
            "prime-field.clean",
            "entropy.clean",
            "bootstrap.clean",
        ]
    );
}
