//! The metadata envelope shared by every audit event record.

use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::{Violation, ViolationKind};

/// Severity assigned when none is given at construction (informational).
pub const DEFAULT_SEVERITY: i32 = 100;

/// Immutable envelope of metadata common to every event.
///
/// `EventDetails` carries identity, actor, timestamp, cause, severity and the
/// opaque payload. Instances are immutable after construction: "mutation" is
/// always expressed as a `with_*` method producing a new instance with one
/// field changed, leaving the original untouched.
///
/// The `id` field is assigned only by the persistence boundary; a record
/// that has not been persisted yet has no id. The `cause` field may only
/// reference the id of a causally-prior persisted record — in particular it
/// may never equal the record's own id.
///
/// # Example
///
/// ```
/// use audit_core::EventDetails;
///
/// let details = EventDetails::new("alice", "<entry/>")
///     .unwrap()
///     .with_severity(50)
///     .with_reason("manual rule change");
///
/// assert_eq!(details.principal(), "alice");
/// assert_eq!(details.severity(), 50);
/// assert!(details.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    /// Persisted identity, absent until the persistence boundary assigns one
    id: Option<u64>,
    /// Actor identity, non-empty
    principal: String,
    /// When the event happened
    creation_date: OffsetDateTime,
    /// Id of a causally-prior persisted record, if any
    cause: Option<u64>,
    /// Syslog-like severity, 100 = informational
    severity: i32,
    /// Optional human-readable explanation
    reason: Option<String>,
    /// Opaque semi-structured payload, forwarded untouched
    payload: String,
}

impl EventDetails {
    /// Creates details for a new, not-yet-persisted event.
    ///
    /// The creation date defaults to the current UTC time and the severity
    /// to [`DEFAULT_SEVERITY`]; both can be overridden with the `with_*`
    /// methods.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` if `principal` is blank.
    pub fn new(principal: impl Into<String>, payload: impl Into<String>) -> Result<Self, Violation> {
        let principal = principal.into();
        if principal.trim().is_empty() {
            return Err(Violation::new(
                ViolationKind::EmptyPrincipal,
                "principal must be a non-empty name",
            ));
        }
        Ok(Self {
            id: None,
            principal,
            creation_date: OffsetDateTime::now_utc(),
            cause: None,
            severity: DEFAULT_SEVERITY,
            reason: None,
            payload: payload.into(),
        })
    }

    /// Returns a copy with the persisted id set.
    ///
    /// Invoked by the persistence boundary at write time; the model itself
    /// never assigns ids.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy with the creation date set.
    pub fn with_creation_date(mut self, date: OffsetDateTime) -> Self {
        self.creation_date = date;
        self
    }

    /// Returns a copy with the cause set to the id of an earlier record.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` if `cause` equals this record's own id.
    pub fn with_cause(mut self, cause: u64) -> Result<Self, Violation> {
        if self.id == Some(cause) {
            return Err(Violation::new(
                ViolationKind::SelfCause { id: cause },
                format!("record {} cannot be its own cause", cause),
            ));
        }
        self.cause = Some(cause);
        Ok(self)
    }

    /// Returns a copy with the severity set.
    pub fn with_severity(mut self, severity: i32) -> Self {
        self.severity = severity;
        self
    }

    /// Returns a copy with the human-readable reason set.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns the persisted id, if one has been assigned.
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the actor identity.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Returns when the event happened.
    pub fn creation_date(&self) -> OffsetDateTime {
        self.creation_date
    }

    /// Returns the id of the causally-prior record, if any.
    pub fn cause(&self) -> Option<u64> {
        self.cause
    }

    /// Returns the severity.
    pub fn severity(&self) -> i32 {
        self.severity
    }

    /// Returns the human-readable reason, if set.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the opaque payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for EventDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .creation_date
            .format(&Rfc3339)
            .map_err(|_| fmt::Error)?;
        write!(
            f,
            "EventDetails[principal={}, date={}, severity={}",
            self.principal, date, self.severity
        )?;

        if let Some(id) = self.id {
            write!(f, ", id={}", id)?;
        }
        if let Some(cause) = self.cause {
            write!(f, ", cause={}", cause)?;
        }
        if let Some(reason) = &self.reason {
            write!(f, ", reason={}", reason)?;
        }

        write!(f, "]")
    }
}
