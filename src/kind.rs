//! Event kind and category identifiers.
//!
//! An [`EventKind`] uniquely names one category of audit event and can test
//! whether a raw kind-name string denotes it. An [`EventCategory`] groups
//! related kinds for display and filtering.

use std::fmt;

/// The unique name identifying a category of audit event.
///
/// Matching is exact string equality on the serialized name — not prefix,
/// not case-insensitive. Two kinds are the same kind iff their serialized
/// names are equal.
///
/// # Example
///
/// ```
/// use audit_core::EventKind;
///
/// let kind = EventKind::new("UserLoggedIn");
/// assert!(kind.matches("UserLoggedIn"));
/// assert!(!kind.matches("userloggedin"));
/// assert_eq!(kind.serialize(), "UserLoggedIn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKind {
    name: String,
}

impl EventKind {
    /// Creates a kind from its serialized name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the serialized name of this kind.
    pub fn serialize(&self) -> &str {
        &self.name
    }

    /// Returns true if `name` denotes this kind.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A named grouping of event kinds.
///
/// Categories are open-ended: modules defining new event kinds declare their
/// own category as a constant. The [`EventCategory::UNKNOWN`] category is
/// always present and is carried by the fallback record.
///
/// # Example
///
/// ```
/// use audit_core::EventCategory;
///
/// const DEPLOYMENT: EventCategory = EventCategory::new("Deployment");
/// assert_eq!(DEPLOYMENT.name(), "Deployment");
/// assert_ne!(DEPLOYMENT, EventCategory::UNKNOWN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventCategory {
    name: &'static str,
}

impl EventCategory {
    /// The category carried by records whose kind was not recognized.
    pub const UNKNOWN: EventCategory = EventCategory::new("Unknown");

    /// Creates a category with the given name.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the category name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
