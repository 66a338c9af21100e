//! Built-in event catalog: user sessions and application lifecycle.
//!
//! Each kind here follows the extension pattern available to any other
//! module: one record type implementing [`EventRecord`], one reconstruction
//! rule pairing the kind name with the record's constructor. Registering
//! [`builtin_rules`] is optional; a registry composed entirely of
//! third-party kinds is just as valid.

use crate::details::EventDetails;
use crate::error::{Error, MalformedPayload};
use crate::kind::{EventCategory, EventKind};
use crate::record::EventRecord;
use crate::rule::{KindRule, ReconstructionRule};

/// Category of user-session events.
pub const USER: EventCategory = EventCategory::new("User");

/// Category of application-lifecycle events.
pub const APPLICATION: EventCategory = EventCategory::new("Application");

/// Rejects payloads the catalog's kinds cannot carry.
///
/// The payload stays opaque to this crate; the only structural requirement
/// the built-in kinds place on it is that it exists at all. Deeper
/// interpretation belongs to the payload codec.
fn require_payload(kind: &str, details: &EventDetails) -> Result<(), Error> {
    if details.payload().trim().is_empty() {
        return Err(MalformedPayload::new(kind, "payload is blank").into());
    }
    Ok(())
}

/// A user opened a session.
#[derive(Debug)]
pub struct UserLoginRecord {
    kind: EventKind,
    details: EventDetails,
}

impl UserLoginRecord {
    /// Serialized kind name of this record type.
    pub const KIND: &'static str = "UserLoggedIn";

    /// Builds the record from persisted details.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the payload is blank.
    pub fn from_details(details: EventDetails) -> Result<Self, Error> {
        require_payload(Self::KIND, &details)?;
        Ok(Self {
            kind: EventKind::new(Self::KIND),
            details,
        })
    }
}

impl EventRecord for UserLoginRecord {
    fn category(&self) -> EventCategory {
        USER
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

/// A user closed a session.
#[derive(Debug)]
pub struct UserLogoutRecord {
    kind: EventKind,
    details: EventDetails,
}

impl UserLogoutRecord {
    /// Serialized kind name of this record type.
    pub const KIND: &'static str = "UserLoggedOut";

    /// Builds the record from persisted details.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the payload is blank.
    pub fn from_details(details: EventDetails) -> Result<Self, Error> {
        require_payload(Self::KIND, &details)?;
        Ok(Self {
            kind: EventKind::new(Self::KIND),
            details,
        })
    }
}

impl EventRecord for UserLogoutRecord {
    fn category(&self) -> EventCategory {
        USER
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

/// The application finished starting up.
#[derive(Debug)]
pub struct ApplicationStartedRecord {
    kind: EventKind,
    details: EventDetails,
}

impl ApplicationStartedRecord {
    /// Serialized kind name of this record type.
    pub const KIND: &'static str = "ApplicationStarted";

    /// Builds the record from persisted details.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the payload is blank.
    pub fn from_details(details: EventDetails) -> Result<Self, Error> {
        require_payload(Self::KIND, &details)?;
        Ok(Self {
            kind: EventKind::new(Self::KIND),
            details,
        })
    }
}

impl EventRecord for ApplicationStartedRecord {
    fn category(&self) -> EventCategory {
        APPLICATION
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

/// Returns the reconstruction rules for the built-in catalog.
///
/// # Example
///
/// ```
/// use audit_core::{builtin_rules, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .register_all(builtin_rules())
///     .unwrap()
///     .build();
///
/// assert_eq!(registry.len(), 3);
/// ```
pub fn builtin_rules() -> Vec<Box<dyn ReconstructionRule>> {
    vec![
        Box::new(KindRule::new(UserLoginRecord::KIND, |details| {
            Ok(Box::new(UserLoginRecord::from_details(details)?) as Box<dyn EventRecord>)
        })),
        Box::new(KindRule::new(UserLogoutRecord::KIND, |details| {
            Ok(Box::new(UserLogoutRecord::from_details(details)?) as Box<dyn EventRecord>)
        })),
        Box::new(KindRule::new(ApplicationStartedRecord::KIND, |details| {
            Ok(Box::new(ApplicationStartedRecord::from_details(details)?) as Box<dyn EventRecord>)
        })),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> EventDetails {
        EventDetails::new("alice", "<session/>").unwrap()
    }

    #[test]
    fn login_record_reports_user_category() {
        let record = UserLoginRecord::from_details(details()).unwrap();
        assert_eq!(record.category(), USER);
        assert_eq!(record.kind().serialize(), "UserLoggedIn");
    }

    #[test]
    fn logout_record_reports_user_category() {
        let record = UserLogoutRecord::from_details(details()).unwrap();
        assert_eq!(record.category(), USER);
        assert_eq!(record.kind().serialize(), "UserLoggedOut");
    }

    #[test]
    fn application_started_reports_application_category() {
        let record = ApplicationStartedRecord::from_details(details()).unwrap();
        assert_eq!(record.category(), APPLICATION);
        assert_eq!(record.kind().serialize(), "ApplicationStarted");
    }

    #[test]
    fn blank_payload_is_malformed() {
        let blank = EventDetails::new("alice", "   ").unwrap();
        let err = UserLoginRecord::from_details(blank).unwrap_err();
        match err {
            Error::Malformed(m) => assert_eq!(m.kind, "UserLoggedIn"),
            other => panic!("expected malformed payload, got {:?}", other),
        }
    }

    #[test]
    fn catalog_records_support_cause_rewrite() {
        let record = UserLogoutRecord::from_details(details()).unwrap();
        let caused = record.with_cause(8).unwrap();
        assert_eq!(caused.details().cause(), Some(8));
        assert_eq!(caused.kind().serialize(), "UserLoggedOut");
    }

    #[test]
    fn builtin_rules_cover_the_catalog() {
        let rules = builtin_rules();
        let names: Vec<&str> = rules.iter().map(|r| r.kind().serialize()).collect();
        assert_eq!(
            names,
            vec!["UserLoggedIn", "UserLoggedOut", "ApplicationStarted"]
        );
    }
}
