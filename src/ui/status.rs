// EDMC Log Collector - ui/status.rs
//
// The transient status label state.
//
// Every informational value reverts to Ready after a fixed delay. Setting a
// new value before the delay elapses cancels the pending revert, so at most
// one revert is ever live per label. Cancellation is by generation counter:
// a revert only fires if no newer set() happened since it was scheduled.

use crate::app::controller::StatusSink;
use crate::core::model::StatusMessage;
use crate::util::constants;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Thread-safe holder of the current `StatusMessage`, with auto-revert.
///
/// Cheap to clone; clones share the same state, so the GUI can paint the
/// label while the controller updates it.
#[derive(Clone)]
pub struct StatusLabel {
    current: Arc<Mutex<StatusMessage>>,
    generation: Arc<AtomicU64>,
    revert_after: Duration,
}

impl StatusLabel {
    /// A label with the production revert delay.
    pub fn new() -> Self {
        Self::with_revert_after(Duration::from_secs(constants::STATUS_REVERT_SECS))
    }

    /// A label with an explicit revert delay (tests use short ones).
    pub fn with_revert_after(revert_after: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(StatusMessage::Ready)),
            generation: Arc::new(AtomicU64::new(0)),
            revert_after,
        }
    }

    /// The value currently displayed.
    pub fn current(&self) -> StatusMessage {
        *lock_recovering(&self.current)
    }

    /// Display `status` and, unless it is already Ready, schedule the revert.
    ///
    /// Bumping the generation first invalidates any revert scheduled by an
    /// earlier set(), which then expires as a no-op.
    pub fn set(&self, status: StatusMessage) {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *lock_recovering(&self.current) = status;

        if status == StatusMessage::Ready {
            return;
        }

        let current = Arc::clone(&self.current);
        let generation = Arc::clone(&self.generation);
        let delay = self.revert_after;
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            // Fire only if nothing newer was displayed in the meantime.
            if generation.load(Ordering::SeqCst) == my_generation {
                *lock_recovering(&current) = StatusMessage::Ready;
            }
        });
    }
}

impl Default for StatusLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for StatusLabel {
    fn set_status(&self, status: StatusMessage) {
        self.set(status);
    }
}

/// Lock a mutex, recovering the guard if a panicking thread poisoned it.
/// The protected value is a plain enum, so a poisoned state is still valid.
fn lock_recovering<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_starts_ready() {
        let label = StatusLabel::with_revert_after(Duration::from_millis(50));
        assert_eq!(label.current(), StatusMessage::Ready);
    }

    #[test]
    fn test_informational_value_reverts_to_ready() {
        let label = StatusLabel::with_revert_after(Duration::from_millis(50));
        label.set(StatusMessage::Collected);
        assert_eq!(label.current(), StatusMessage::Collected);

        sleep(Duration::from_millis(200));
        assert_eq!(label.current(), StatusMessage::Ready);
    }

    #[test]
    fn test_newer_set_cancels_pending_revert() {
        let label = StatusLabel::with_revert_after(Duration::from_millis(150));
        label.set(StatusMessage::Collecting);
        sleep(Duration::from_millis(80));
        label.set(StatusMessage::Collected);

        // Past the first revert deadline: the stale revert must not fire.
        sleep(Duration::from_millis(120));
        assert_eq!(
            label.current(),
            StatusMessage::Collected,
            "the cancelled revert must not clobber the newer status"
        );

        // Past the second deadline: the live revert fires.
        sleep(Duration::from_millis(200));
        assert_eq!(label.current(), StatusMessage::Ready);
    }

    #[test]
    fn test_setting_ready_schedules_nothing() {
        let label = StatusLabel::with_revert_after(Duration::from_millis(30));
        label.set(StatusMessage::Ready);
        sleep(Duration::from_millis(80));
        assert_eq!(label.current(), StatusMessage::Ready);
    }
}
