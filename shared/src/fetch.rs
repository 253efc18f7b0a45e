//! Remote fetch lifecycle as seen by the views.

use crate::error::ConsoleError;

/// Where a remote value currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Failed(String),
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_result(&self) -> Result<&T, ConsoleError> {
        match self {
            FetchState::Pending => Err(ConsoleError::FetchPending),
            FetchState::Failed(reason) => Err(ConsoleError::FetchFailed(reason.clone())),
            FetchState::Ready(value) => Ok(value),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

/// Identifies one issued request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Hands out monotonically increasing tickets.
#[derive(Debug, Default)]
pub struct FetchTracker {
    issued: u64,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        let state: FetchState<Vec<u8>> = FetchState::default();
        assert!(state.is_pending());
        assert_eq!(state.as_result(), Err(ConsoleError::FetchPending));
    }

    #[test]
    fn from_result() {
        let ok: FetchState<u8> = Ok::<u8, String>(3).into();
        assert_eq!(ok.ready(), Some(&3));

        let err: FetchState<u8> = Err::<u8, _>("timeout").into();
        assert_eq!(
            err.as_result(),
            Err(ConsoleError::FetchFailed("timeout".to_string()))
        );
    }

    #[test]
    fn tickets_increase() {
        let mut tracker = FetchTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
        assert_ne!(a, b);
    }
}
