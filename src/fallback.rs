//! The safe default record for unrecognized kind names.

use crate::details::EventDetails;
use crate::error::Error;
use crate::kind::{EventCategory, EventKind};
use crate::record::EventRecord;

/// The record produced when no registered rule recognizes a kind name.
///
/// An unrecognized kind is not corruption: it usually means the record was
/// written by a newer component whose event catalog this process does not
/// know yet, or by a legacy one whose kinds were retired. The payload and
/// metadata round-trip unchanged so nothing is lost, and the raw kind name
/// is preserved for later reinterpretation.
///
/// # Example
///
/// ```
/// use audit_core::{EventCategory, EventDetails, EventRecord, UnspecializedRecord};
///
/// let details = EventDetails::new("alice", "<entry/>").unwrap();
/// let record = UnspecializedRecord::new("SomeFutureKind", details);
///
/// assert_eq!(record.category(), EventCategory::UNKNOWN);
/// assert_eq!(record.kind().serialize(), "SomeFutureKind");
/// ```
#[derive(Debug)]
pub struct UnspecializedRecord {
    kind: EventKind,
    details: EventDetails,
}

impl UnspecializedRecord {
    /// Creates a fallback record preserving the raw kind name and details.
    pub fn new(kind_name: impl Into<String>, details: EventDetails) -> Self {
        Self {
            kind: EventKind::new(kind_name),
            details,
        }
    }
}

impl EventRecord for UnspecializedRecord {
    fn category(&self) -> EventCategory {
        EventCategory::UNKNOWN
    }

    fn kind(&self) -> &EventKind {
        &self.kind
    }

    fn details(&self) -> &EventDetails {
        &self.details
    }

    fn with_cause(&self, cause_id: u64) -> Result<Box<dyn EventRecord>, Error> {
        Ok(Box::new(Self {
            kind: self.kind.clone(),
            details: self.details.clone().with_cause(cause_id)?,
        }))
    }
}
