//! The set of started-but-not-finished checks.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;

use super::CorrelationKey;

/// Open spans waiting for their check-finished event, keyed by correlation key.
///
/// Insert and remove-on-lookup each take the lock once, so concurrent checks
/// never observe a half-updated map. Key uniqueness is not enforced: inserting
/// under an existing key replaces the previous entry and hands it back to the
/// caller.
///
/// Entries are only added and removed by the bridge's event handlers; code
/// outside the crate can inspect the set but not change it.
///
/// ```rust
/// use gate_trace::{Argument, ArgumentDescriptor, AuthorizationTraceBridge, EntityRef};
/// use gate_trace::correlation::CorrelationKey;
/// use gate_trace::testing::RecordingSink;
///
/// let bridge = AuthorizationTraceBridge::new(RecordingSink::new());
/// let user = EntityRef::new("User", 1);
/// bridge.on_check_started(&user, "view", &[Argument::from(3)]);
///
/// let key = CorrelationKey::derive(&ArgumentDescriptor::format(&[Argument::from(3)])).unwrap();
/// assert!(bridge.pending().contains(&key));
/// assert_eq!(bridge.pending().len(), 1);
/// ```
///
/// ```compile_fail
/// use gate_trace::AuthorizationTraceBridge;
/// use gate_trace::correlation::CorrelationKey;
/// use gate_trace::testing::RecordingSink;
///
/// let bridge = AuthorizationTraceBridge::new(RecordingSink::new());
/// bridge.pending().take(&CorrelationKey::from_bytes(b"[]"));
/// ```
pub struct PendingSet<T> {
    entries: Mutex<HashMap<CorrelationKey, T>>,
}

impl<T> PendingSet<T> {
    pub(crate) fn new() -> Self {
        Self { entries: Mutex::new(HashMap::new()) }
    }

    /// Stores `value` under `key`, returning the entry it replaced.
    pub(crate) fn insert(&self, key: CorrelationKey, value: T) -> Option<T> {
        self.entries.lock().insert(key, value)
    }

    /// Removes and returns the entry stored under `key`.
    pub(crate) fn take(&self, key: &CorrelationKey) -> Option<T> {
        self.entries.lock().remove(key)
    }

    /// Returns `true` if an entry is waiting under `key`.
    pub fn contains(&self, key: &CorrelationKey) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Returns the number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns the pending keys in unspecified order.
    pub fn keys(&self) -> Vec<CorrelationKey> {
        self.entries.lock().keys().cloned().collect()
    }
}

impl<T> fmt::Debug for PendingSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSet").field("len", &self.len()).finish()
    }
}
