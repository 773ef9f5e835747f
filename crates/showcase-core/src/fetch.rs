//! Fetch Supersedence
//!
//! Every request gets a generation number. Only the response for the newest
//! generation is applied; anything older arrived late and is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lifecycle of one fetched resource
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Proof that a request was started; carried to the response handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Issues request generations for one resource
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; supersedes every ticket issued before
    pub fn begin(&self) -> RequestTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { generation }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.latest.load(Ordering::SeqCst)
    }

    /// Turn a response into the next state, or `None` if a newer request is
    /// in flight
    pub fn resolve<T, E: std::fmt::Display>(
        &self,
        ticket: RequestTicket,
        result: Result<T, E>,
    ) -> Option<FetchState<T>> {
        if !self.is_current(ticket) {
            log::debug!(
                "dropping stale response #{} (latest #{})",
                ticket.generation,
                self.latest.load(Ordering::SeqCst)
            );
            return None;
        }
        Some(match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => {
                log::warn!("request #{} failed: {}", ticket.generation, e);
                FetchState::Failed(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_response_applies() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        let state = tracker.resolve::<_, String>(ticket, Ok(vec![1, 2]));
        assert_eq!(state, Some(FetchState::Ready(vec![1, 2])));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        // second resolves first, then the slow first one arrives
        assert!(tracker.resolve::<_, String>(second, Ok("new")).is_some());
        assert_eq!(tracker.resolve::<_, String>(first, Ok("old")), None);
    }

    #[test]
    fn test_failure_becomes_failed_state() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        let state = tracker.resolve::<(), _>(ticket, Err("offline"));
        assert_eq!(state.as_ref().and_then(|s| s.error()), Some("offline"));
    }

    #[test]
    fn test_state_accessors() {
        let loading: FetchState<u8> = FetchState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);
        assert_eq!(FetchState::Ready(3).ready(), Some(&3));
    }
}
