use std::fmt;

/// Errors that can occur in the audit event model.
#[derive(Debug)]
pub enum Error {
    /// An invariant of the model was violated
    Violation(Violation),
    /// A matched rule could not interpret a payload
    Malformed(MalformedPayload),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Violation(v) => write!(f, "Invariant violation: {}", v),
            Error::Malformed(m) => write!(f, "Malformed payload: {}", m),
        }
    }
}

impl std::error::Error for Error {}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

impl From<MalformedPayload> for Error {
    fn from(m: MalformedPayload) -> Self {
        Error::Malformed(m)
    }
}

/// An invariant violation with details about what failed.
#[derive(Debug)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

/// The kind of invariant violation.
#[derive(Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// The principal name was empty at construction
    EmptyPrincipal,
    /// A record's cause was set to its own id
    SelfCause {
        /// The id the record tried to reference
        id: u64,
    },
    /// Two reconstruction rules were registered for the same kind name
    DuplicateRule {
        /// The kind name registered twice
        name: String,
    },
    /// A cause referenced an id that was never assigned
    UnknownCause {
        /// The unassigned id the cause referenced
        cause: u64,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::EmptyPrincipal => write!(f, "Empty principal"),
            ViolationKind::SelfCause { id } => write!(f, "Self-referential cause '{}'", id),
            ViolationKind::DuplicateRule { name } => write!(f, "Duplicate rule for '{}'", name),
            ViolationKind::UnknownCause { cause } => write!(f, "Unknown cause '{}'", cause),
        }
    }
}

/// A reconstruction failure: the matched rule could not interpret the payload.
///
/// This is distinct from an unknown kind name. An unknown kind produces the
/// fallback record; a malformed payload under a *recognized* kind is genuine
/// corruption and is surfaced to the caller instead of being hidden behind
/// unknown-kind semantics.
#[derive(Debug)]
pub struct MalformedPayload {
    /// The kind name whose rule rejected the payload
    pub kind: String,
    /// Description of the structural problem
    pub problem: String,
}

impl MalformedPayload {
    /// Creates a new malformed-payload failure.
    pub fn new(kind: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for MalformedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind '{}': {}", self.kind, self.problem)
    }
}

impl std::error::Error for MalformedPayload {}
