//! Adapter-clocked rate limiting.
//!
//! Neither type owns a timer. The adapter reports events with `call(now_ms)` and later calls
//! `poll(now_ms)` (e.g. from a timer armed at `deadline()`) to collect deferred firings.
//! Dropping or cancelling the state is enough to guarantee nothing fires afterwards.

/// Leading-edge throttle with one coalesced trailing call.
///
/// The first call in a burst fires immediately. Calls arriving within `window_ms` of the last
/// firing replace any pending trailing call with one due `window_ms` after the newest call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    window_ms: u64,
    last_fired_ms: Option<u64>,
    // (due_ms, stamp_ms): stamp is the time of the call that scheduled it.
    pending: Option<(u64, u64)>,
}

impl Throttle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_fired_ms: None,
            pending: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Registers an event. Returns `true` if the caller should run the handler now.
    pub fn call(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_fired_ms {
            if now_ms < last.saturating_add(self.window_ms) {
                self.pending = Some((now_ms.saturating_add(self.window_ms), now_ms));
                return false;
            }
        }
        self.last_fired_ms = Some(now_ms);
        true
    }

    /// Returns `true` if the pending trailing call is due; it is consumed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some((due, stamp)) if now_ms >= due => {
                self.pending = None;
                self.last_fired_ms = Some(stamp);
                true
            }
            _ => false,
        }
    }

    /// When the pending trailing call becomes due, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|(due, _)| due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending trailing call.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Trailing-edge debounce: fires once after `delay_ms` without further calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    due_ms: Option<u64>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            due_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Registers an event, restarting the quiet period.
    pub fn call(&mut self, now_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Returns `true` once the quiet period has elapsed; the firing is consumed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.due_ms
    }

    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }
}
