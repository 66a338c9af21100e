//! End-to-end flows: registration, reconstruction, persistence round trips.

use audit_core::{
    builtin_rules, Error, EventCategory, EventDetails, EventKind, EventRecord, EventTrail,
    KindRule, RegistryBuilder, ViolationKind, APPLICATION, USER,
};

/// A record type defined outside the crate, proving the variant family is
/// open to independent modules.
#[derive(Debug)]
struct RuleModifiedRecord {
    kind: EventKind,
    details: EventDetails,
}

const CONFIGURATION: EventCategory = EventCategory::new("Configuration");

impl RuleModifiedRecord {
    const KIND: &'static str = "RuleModified";
}

impl EventRecord for RuleModifiedRecord {
    fn category(&self) -> EventCategory {
        CONFIGURATION
    }

    fn kind(&self) -> &EventKind {
        &self.kind
    }

    fn details(&self) -> &EventDetails {
        &self.details
    }

    fn with_cause(&self, cause_id: u64) -> Result<Box<dyn EventRecord>, Error> {
        Ok(Box::new(RuleModifiedRecord {
            kind: self.kind.clone(),
            details: self.details.clone().with_cause(cause_id)?,
        }))
    }
}

fn registry() -> audit_core::KindRegistry {
    RegistryBuilder::new()
        .register_all(builtin_rules())
        .unwrap()
        .register(KindRule::new(RuleModifiedRecord::KIND, |details| {
            Ok(Box::new(RuleModifiedRecord {
                kind: EventKind::new(RuleModifiedRecord::KIND),
                details,
            }))
        }))
        .unwrap()
        .build()
}

#[test]
fn third_party_kind_dispatches_like_a_builtin() {
    let registry = registry();
    let details = EventDetails::new("alice", "<rule id=\"42\"/>").unwrap();

    let record = registry.reconstruct("RuleModified", details).unwrap();
    assert_eq!(record.category(), CONFIGURATION);
    assert_eq!(record.kind().serialize(), "RuleModified");
}

#[test]
fn builtin_kinds_come_back_strongly_typed() {
    let registry = registry();
    let details = EventDetails::new("alice", "<entry/>").unwrap();

    let login = registry.reconstruct("UserLoggedIn", details.clone()).unwrap();
    assert_eq!(login.category(), USER);

    let started = registry
        .reconstruct("ApplicationStarted", details)
        .unwrap();
    assert_eq!(started.category(), APPLICATION);
}

#[test]
fn unknown_kind_degrades_to_unspecialized() {
    let registry = registry();
    let details = EventDetails::new("alice", "<entry/>").unwrap();

    let record = registry.reconstruct("UnknownType", details).unwrap();
    assert_eq!(record.category(), EventCategory::UNKNOWN);
    assert_eq!(record.kind().serialize(), "UnknownType");
    assert_eq!(record.principal(), "alice");
    assert_eq!(record.severity(), 100);
}

#[test]
fn trail_round_trip_preserves_every_event() {
    let registry = registry();
    let trail = EventTrail::new();

    let login = registry
        .reconstruct(
            "UserLoggedIn",
            EventDetails::new("alice", "<session/>").unwrap(),
        )
        .unwrap();
    let login_id = trail.save(login.as_ref()).unwrap();

    // The logout is explained by the login, now that the login has an id.
    let logout = registry
        .reconstruct(
            "UserLoggedOut",
            EventDetails::new("alice", "<session/>").unwrap(),
        )
        .unwrap();
    let logout = logout.with_cause(login_id).unwrap();
    let logout_id = trail.save(logout.as_ref()).unwrap();

    assert_eq!(login_id, 1);
    assert_eq!(logout_id, 2);

    let results = registry.reconstruct_batch(trail.rows());
    assert_eq!(results.len(), 2);

    let reloaded_login = results[0].as_ref().unwrap();
    assert_eq!(reloaded_login.kind().serialize(), "UserLoggedIn");
    assert_eq!(reloaded_login.id(), Some(login_id));

    let reloaded_logout = results[1].as_ref().unwrap();
    assert_eq!(reloaded_logout.kind().serialize(), "UserLoggedOut");
    assert_eq!(reloaded_logout.details().cause(), Some(login_id));
}

#[test]
fn one_corrupt_row_does_not_abort_the_batch() {
    let registry = registry();

    let rows = vec![
        (
            "UserLoggedIn".to_string(),
            EventDetails::new("alice", "<session/>").unwrap(),
        ),
        // Blank payload under a recognized kind: genuine corruption.
        (
            "UserLoggedIn".to_string(),
            EventDetails::new("mallory", "").unwrap(),
        ),
        (
            "NotInAnyCatalog".to_string(),
            EventDetails::new("bob", "<entry/>").unwrap(),
        ),
    ];

    let results = registry.reconstruct_batch(rows);

    assert!(results[0].is_ok());
    match results[1].as_ref().unwrap_err() {
        Error::Malformed(m) => assert_eq!(m.kind, "UserLoggedIn"),
        other => panic!("expected malformed payload, got {:?}", other),
    }
    let fallback = results[2].as_ref().unwrap();
    assert_eq!(fallback.category(), EventCategory::UNKNOWN);
    assert_eq!(fallback.principal(), "bob");
}

#[test]
fn duplicate_catalog_registration_is_a_configuration_error() {
    let err = RegistryBuilder::new()
        .register_all(builtin_rules())
        .unwrap()
        .register_all(builtin_rules())
        .unwrap_err();

    match err {
        Error::Violation(v) => assert!(matches!(v.kind, ViolationKind::DuplicateRule { .. })),
        other => panic!("expected violation, got {:?}", other),
    }
}

#[test]
fn reconstruction_emits_trace_events_without_failing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let registry = registry();

    let known = registry
        .reconstruct(
            "UserLoggedIn",
            EventDetails::new("alice", "<session/>").unwrap(),
        )
        .unwrap();
    assert_eq!(known.category(), USER);

    let unknown = registry
        .reconstruct("Mystery", EventDetails::new("bob", "<entry/>").unwrap())
        .unwrap();
    assert_eq!(unknown.category(), EventCategory::UNKNOWN);

    let malformed = registry.reconstruct("UserLoggedIn", EventDetails::new("eve", " ").unwrap());
    assert!(malformed.is_err());
}

#[test]
fn cause_chain_survives_reconstruction() {
    let registry = registry();
    let trail = EventTrail::new();

    let first = registry
        .reconstruct(
            "ApplicationStarted",
            EventDetails::new("system", "<boot/>").unwrap(),
        )
        .unwrap();
    let first_id = trail.save(first.as_ref()).unwrap();

    let second = registry
        .reconstruct(
            "RuleModified",
            EventDetails::new("alice", "<rule/>").unwrap(),
        )
        .unwrap()
        .with_cause(first_id)
        .unwrap();
    let second_id = trail.save(second.as_ref()).unwrap();

    let (_, stored) = trail.get(second_id).unwrap();
    assert_eq!(stored.cause(), Some(first_id));

    // A persisted record can never be re-pointed at itself.
    let reloaded = registry.reconstruct("RuleModified", stored).unwrap();
    let err = reloaded.with_cause(second_id).unwrap_err();
    match err {
        Error::Violation(v) => assert_eq!(v.kind, ViolationKind::SelfCause { id: second_id }),
        other => panic!("expected violation, got {:?}", other),
    }
}
