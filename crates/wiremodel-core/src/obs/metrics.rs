use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// Metrics
/// Ephemeral, in-memory counters for model-layer operations.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EventState {
    pub records_constructed: u64,
    pub payloads_applied: u64,
    pub attribute_writes: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Snapshot the current counters.
#[must_use]
pub fn metrics_report() -> EventState {
    EVENT_STATE.with(|state| state.borrow().clone())
}

/// Zero all counters.
pub fn metrics_reset_all() {
    with_state_mut(|state| *state = EventState::default());
}

pub(crate) fn record_constructed() {
    with_state_mut(|state| state.records_constructed += 1);
}

pub(crate) fn payload_applied() {
    with_state_mut(|state| state.payloads_applied += 1);
}

pub(crate) fn attribute_write() {
    with_state_mut(|state| state.attribute_writes += 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counters are thread-local, so a single test owns the whole state.
    #[test]
    fn counters_accumulate_and_reset() {
        metrics_reset_all();
        record_constructed();
        record_constructed();
        payload_applied();
        attribute_write();

        let report = metrics_report();
        assert_eq!(report.records_constructed, 2);
        assert_eq!(report.payloads_applied, 1);
        assert_eq!(report.attribute_writes, 1);

        metrics_reset_all();
        assert_eq!(metrics_report(), EventState::default());
    }
}
