//! In-memory event persistence for tests and demonstration.
//!
//! The real persistence layer is an external collaborator; this module
//! stands in for it at the boundary the model defines. It assigns ids at
//! write time and serves back the generic (kind-name, details) rows that
//! feed [`KindRegistry::reconstruct`](crate::KindRegistry::reconstruct).

use std::cell::{Cell, RefCell};

use crate::details::EventDetails;
use crate::error::{Error, Violation, ViolationKind};
use crate::record::EventRecord;

/// In-memory recorder implementing the persistence boundary.
///
/// Ids are assigned sequentially at save time; the model itself never
/// assigns one. Stored rows keep only the generic persisted form — the
/// serialized kind name plus the details with the id filled in — which is
/// exactly what re-enters reconstruction on read. In production you would
/// typically integrate a persistent audit store instead.
///
/// # Example
///
/// ```
/// use audit_core::{EventDetails, EventTrail, UnspecializedRecord};
///
/// let trail = EventTrail::new();
/// let details = EventDetails::new("alice", "<entry/>").unwrap();
/// let id = trail.save(&UnspecializedRecord::new("Imported", details)).unwrap();
///
/// let (kind, stored) = trail.get(id).unwrap();
/// assert_eq!(kind, "Imported");
/// assert_eq!(stored.id(), Some(id));
/// ```
pub struct EventTrail {
    rows: RefCell<Vec<(u64, String, EventDetails)>>,
    next_id: Cell<u64>,
}

impl EventTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Persists a record, assigning it the next id.
    ///
    /// # Errors
    ///
    /// Returns a `Violation` if the record carries a cause that does not
    /// reference a previously-assigned id.
    pub fn save(&self, record: &dyn EventRecord) -> Result<u64, Error> {
        if let Some(cause) = record.details().cause() {
            if cause == 0 || cause >= self.next_id.get() {
                return Err(Violation::new(
                    ViolationKind::UnknownCause { cause },
                    format!("cause {} was never assigned by this store", cause),
                )
                .into());
            }
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.rows.borrow_mut().push((
            id,
            record.kind().serialize().to_string(),
            record.details().clone().with_id(id),
        ));
        Ok(id)
    }

    /// Returns the stored (kind-name, details) pair for `id`, if present.
    pub fn get(&self, id: u64) -> Option<(String, EventDetails)> {
        self.rows
            .borrow()
            .iter()
            .find(|(row_id, _, _)| *row_id == id)
            .map(|(_, kind, details)| (kind.clone(), details.clone()))
    }

    /// Returns a snapshot of all stored rows in save order.
    pub fn rows(&self) -> Vec<(String, EventDetails)> {
        self.rows
            .borrow()
            .iter()
            .map(|(_, kind, details)| (kind.clone(), details.clone()))
            .collect()
    }

    /// Returns the number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    /// Removes all stored rows.
    ///
    /// Assigned ids are not reused afterwards.
    pub fn clear(&self) {
        self.rows.borrow_mut().clear();
    }
}

impl Default for EventTrail {
    fn default() -> Self {
        Self::new()
    }
}
