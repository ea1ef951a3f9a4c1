use serde::Serialize;

/// Dashboard counters for the current day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub pickup_ready: usize,
    pub inbound_done: usize,
}
