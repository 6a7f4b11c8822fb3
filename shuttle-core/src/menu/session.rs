//! Training session placeholder
//!
//! No motion sensing happens yet; a session only knows whether it is
//! paused and how long it has been running.

/// Ephemeral session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    paused: bool,
    active_ms: u64,
}

impl Session {
    /// Start a running session
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the session is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop the clock
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Restart the clock
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Account for `elapsed_ms` of wall time; paused time is not counted
    pub fn advance(&mut self, elapsed_ms: u32) {
        if !self.paused {
            self.active_ms = self.active_ms.saturating_add(elapsed_ms as u64);
        }
    }

    /// Time spent running (ms)
    pub fn active_ms(&self) -> u64 {
        self.active_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_runs() {
        let session = Session::new();
        assert!(!session.is_paused());
        assert_eq!(session.active_ms(), 0);
    }

    #[test]
    fn test_paused_time_not_counted() {
        let mut session = Session::new();
        session.advance(100);
        session.pause();
        session.advance(1_000);
        session.resume();
        session.advance(25);
        assert_eq!(session.active_ms(), 125);
    }
}
