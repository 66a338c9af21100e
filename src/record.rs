//! The typed audit event record interface.

use std::fmt;

use crate::details::EventDetails;
use crate::error::Error;
use crate::kind::{EventCategory, EventKind};

/// A strongly-typed audit event.
///
/// The record family is open-ended: new event kinds are defined by modules
/// unknown to this crate, each as one concrete type implementing this trait
/// plus one [`ReconstructionRule`](crate::ReconstructionRule). Every variant
/// owns exactly one [`EventDetails`] and exposes its metadata through it.
///
/// Records are immutable; the one "update" every variant must support is
/// [`with_cause`](EventRecord::with_cause), since any event may later be
/// explained by an earlier one once both have persisted ids.
pub trait EventRecord: fmt::Debug + Send + Sync {
    /// Returns the category this record belongs to.
    fn category(&self) -> EventCategory;

    /// Returns the kind of this record.
    fn kind(&self) -> &EventKind;

    /// Returns the metadata envelope.
    fn details(&self) -> &EventDetails;

    /// Returns a new record whose details carry `cause = cause_id`, all
    /// other fields unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` if `cause_id` equals this record's own id.
    fn with_cause(&self, cause_id: u64) -> Result<Box<dyn EventRecord>, Error>;

    /// Returns the persisted id, if one has been assigned.
    fn id(&self) -> Option<u64> {
        self.details().id()
    }

    /// Returns the actor identity.
    fn principal(&self) -> &str {
        self.details().principal()
    }

    /// Returns the severity.
    fn severity(&self) -> i32 {
        self.details().severity()
    }
}
