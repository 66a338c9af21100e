//! The reconstruction extension point.

use crate::details::EventDetails;
use crate::error::Error;
use crate::kind::EventKind;
use crate::record::EventRecord;

/// A rule turning persisted details into the typed record for one kind.
///
/// This is the extension point of the model: each new event category is
/// exactly one rule plus one [`EventRecord`] variant, registered with a
/// [`RegistryBuilder`](crate::RegistryBuilder). No shared code is touched to
/// add one.
///
/// The registry only invokes [`apply`](ReconstructionRule::apply) on a rule
/// whose kind matched the incoming name, so implementations may assume the
/// details belong to their kind.
pub trait ReconstructionRule: Send + Sync {
    /// Returns the single kind this rule handles.
    fn kind(&self) -> &EventKind;

    /// Produces the concrete record for this rule's kind.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` when the details' payload cannot be
    /// interpreted as an instance of this kind.
    fn apply(&self, details: EventDetails) -> Result<Box<dyn EventRecord>, Error>;
}

type BuildFn = dyn Fn(EventDetails) -> Result<Box<dyn EventRecord>, Error> + Send + Sync;

/// A closure-backed [`ReconstructionRule`].
///
/// Most kinds do not need a dedicated rule type; pairing the kind with a
/// constructor function is enough.
///
/// # Example
///
/// ```
/// use audit_core::{EventDetails, KindRule, RegistryBuilder, UnspecializedRecord};
///
/// let rule = KindRule::new("Imported", |details| {
///     Ok(Box::new(UnspecializedRecord::new("Imported", details)))
/// });
///
/// let registry = RegistryBuilder::new().register(rule).unwrap().build();
/// assert!(registry.contains("Imported"));
/// ```
pub struct KindRule {
    kind: EventKind,
    build: Box<BuildFn>,
}

impl KindRule {
    /// Creates a rule for `kind_name` backed by `build`.
    pub fn new<F>(kind_name: impl Into<String>, build: F) -> Self
    where
        F: Fn(EventDetails) -> Result<Box<dyn EventRecord>, Error> + Send + Sync + 'static,
    {
        Self {
            kind: EventKind::new(kind_name),
            build: Box::new(build),
        }
    }
}

impl ReconstructionRule for KindRule {
    fn kind(&self) -> &EventKind {
        &self.kind
    }

    fn apply(&self, details: EventDetails) -> Result<Box<dyn EventRecord>, Error> {
        (self.build)(details)
    }
}
