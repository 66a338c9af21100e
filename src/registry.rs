//! Ordered rule registration and kind dispatch.

use crate::details::EventDetails;
use crate::error::{Error, Violation, ViolationKind};
use crate::fallback::UnspecializedRecord;
use crate::record::EventRecord;
use crate::rule::ReconstructionRule;

/// Accumulates reconstruction rules before the registry is frozen.
///
/// `RegistryBuilder` is the only way to construct a [`KindRegistry`]. All
/// registrations happen during initialization; [`build`](RegistryBuilder::build)
/// consumes the builder, so once the registry exists no further rules can be
/// added. Re-initialization means building a new registry.
///
/// Registration order is preserved and becomes the registry's scan order.
/// Registering two rules for the same kind name is a configuration error and
/// is rejected immediately rather than silently resolved.
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
/// assert!(registry.contains("UserLoggedIn"));
/// ```
pub struct RegistryBuilder {
    rules: Vec<Box<dyn ReconstructionRule>>,
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule, keeping registration order.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` if a rule for the same kind name is already
    /// registered.
    pub fn register(mut self, rule: impl ReconstructionRule + 'static) -> Result<Self, Error> {
        let name = rule.kind().serialize();
        if self.rules.iter().any(|r| r.kind().matches(name)) {
            return Err(Violation::new(
                ViolationKind::DuplicateRule {
                    name: name.to_string(),
                },
                format!("a rule for kind '{}' is already registered", name),
            )
            .into());
        }
        self.rules.push(Box::new(rule));
        Ok(self)
    }

    /// Adds a batch of rules in iteration order.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` on the first duplicate kind name, leaving the
    /// rules before it registered.
    pub fn register_all(
        mut self,
        rules: impl IntoIterator<Item = Box<dyn ReconstructionRule>>,
    ) -> Result<Self, Error> {
        for rule in rules {
            let name = rule.kind().serialize();
            if self.rules.iter().any(|r| r.kind().matches(name)) {
                return Err(Violation::new(
                    ViolationKind::DuplicateRule {
                        name: name.to_string(),
                    },
                    format!("a rule for kind '{}' is already registered", name),
                )
                .into());
            }
            self.rules.push(rule);
        }
        Ok(self)
    }

    /// Freezes the builder into a read-only registry.
    pub fn build(self) -> KindRegistry {
        KindRegistry { rules: self.rules }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The frozen, read-only collection of reconstruction rules.
///
/// `KindRegistry` turns a persisted (kind-name, details) pair back into a
/// typed [`EventRecord`]. It holds no interior mutability: once built it is
/// safe to share across threads and call concurrently.
pub struct KindRegistry {
    rules: Vec<Box<dyn ReconstructionRule>>,
}

impl KindRegistry {
    /// Reconstructs the typed record for a persisted (kind-name, details) pair.
    ///
    /// Rules are scanned in registration order; the first rule whose kind
    /// matches `kind_name` is applied and its result returned immediately.
    /// When no rule matches, the [`UnspecializedRecord`] fallback carrying
    /// the original details is returned — that path never fails, since it is
    /// the safety net for records written by components with a newer or
    /// older event catalog than this process.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` when the matched rule cannot interpret the
    /// details. That failure names the offending kind and is never
    /// downgraded to the fallback: hiding genuine corruption behind
    /// unknown-kind semantics would make it invisible.
    ///
    /// # Example
    ///
    /// ```
    /// use audit_core::{builtin_rules, EventCategory, EventDetails, RegistryBuilder};
    ///
    /// let registry = RegistryBuilder::new()
    ///     .register_all(builtin_rules())
    ///     .unwrap()
    ///     .build();
    ///
    /// let details = EventDetails::new("alice", "<entry/>").unwrap();
    /// let record = registry.reconstruct("UserLoggedIn", details.clone()).unwrap();
    /// assert_eq!(record.kind().serialize(), "UserLoggedIn");
    ///
    /// let record = registry.reconstruct("NotInCatalog", details).unwrap();
    /// assert_eq!(record.category(), EventCategory::UNKNOWN);
    /// ```
    pub fn reconstruct(
        &self,
        kind_name: &str,
        details: EventDetails,
    ) -> Result<Box<dyn EventRecord>, Error> {
        for rule in &self.rules {
            if rule.kind().matches(kind_name) {
                return match rule.apply(details) {
                    Ok(record) => {
                        tracing::debug!(
                            target: "audit_reconstruct",
                            kind = %kind_name,
                            category = %record.category(),
                            "reconstructed event"
                        );
                        Ok(record)
                    }
                    Err(err) => {
                        tracing::warn!(
                            target: "audit_reconstruct",
                            kind = %kind_name,
                            error = %err,
                            "reconstruction failed"
                        );
                        Err(err)
                    }
                };
            }
        }

        tracing::info!(
            target: "audit_reconstruct",
            kind = %kind_name,
            "no rule matched, keeping event unspecialized"
        );
        Ok(Box::new(UnspecializedRecord::new(kind_name, details)))
    }

    /// Reconstructs a batch of persisted pairs, isolating per-record failures.
    ///
    /// One malformed record never aborts the rest of the batch: each entry
    /// of the returned vector is the outcome for the pair at the same
    /// position.
    pub fn reconstruct_batch(
        &self,
        rows: impl IntoIterator<Item = (String, EventDetails)>,
    ) -> Vec<Result<Box<dyn EventRecord>, Error>> {
        rows.into_iter()
            .map(|(kind_name, details)| self.reconstruct(&kind_name, details))
            .collect()
    }

    /// Returns true if a rule is registered for `kind_name`.
    pub fn contains(&self, kind_name: &str) -> bool {
        self.rules.iter().any(|r| r.kind().matches(kind_name))
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
