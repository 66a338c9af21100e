//! Extensible audit-event model with typed reconstruction.
//!
//! This crate provides immutable records describing "something happened" —
//! an actor did X at time T, possibly because of a prior event — plus the
//! dispatch machinery to rebuild a strongly-typed event from its generic
//! persisted form (a kind-name string and a metadata envelope):
//!
//! - [`EventDetails`]: immutable metadata envelope shared by every record
//! - [`EventKind`] / [`EventCategory`]: event identity and grouping
//! - [`EventRecord`]: the typed event, an open-ended family of variants
//! - [`ReconstructionRule`] / [`KindRule`]: the extension point, one rule
//!   per kind
//! - [`RegistryBuilder`] / [`KindRegistry`]: ordered registration, frozen
//!   into a read-only dispatcher
//! - [`UnspecializedRecord`]: the safe fallback for unrecognized kinds
//! - [`EventTrail`]: in-memory stand-in for the persistence boundary
//!
//! New event kinds are added by registering a rule; the dispatch core never
//! changes. Unknown kinds degrade to the fallback record instead of failing,
//! so readers and writers can run different versions of the event catalog.
//!
//! # Examples
//!
//! ```
//! use audit_core::{builtin_rules, EventCategory, EventDetails, RegistryBuilder};
//!
//! let registry = RegistryBuilder::new()
//!     .register_all(builtin_rules())
//!     .unwrap()
//!     .build();
//!
//! // A kind the registry knows comes back strongly typed.
//! let details = EventDetails::new("alice", "<entry/>").unwrap();
//! let record = registry.reconstruct("UserLoggedIn", details.clone()).unwrap();
//! assert_eq!(record.kind().serialize(), "UserLoggedIn");
//!
//! // A kind it does not know degrades safely.
//! let record = registry.reconstruct("FromTheFuture", details).unwrap();
//! assert_eq!(record.category(), EventCategory::UNKNOWN);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod details;
mod error;
mod fallback;
mod kind;
mod record;
mod registry;
mod rule;
mod trail;

pub use catalog::{
    builtin_rules, ApplicationStartedRecord, UserLoginRecord, UserLogoutRecord, APPLICATION, USER,
};
pub use details::{EventDetails, DEFAULT_SEVERITY};
pub use error::{Error, MalformedPayload, Violation, ViolationKind};
pub use fallback::UnspecializedRecord;
pub use kind::{EventCategory, EventKind};
pub use record::EventRecord;
pub use registry::{KindRegistry, RegistryBuilder};
pub use rule::{KindRule, ReconstructionRule};
pub use trail::EventTrail;
