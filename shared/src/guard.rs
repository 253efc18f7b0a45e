//! Gate in front of protected views.
//!
//! A guard lives for one mount of a protected view. The first
//! [`SessionGuard::check_access`] reads session presence and decides; later
//! calls replay that decision without touching storage or navigating again,
//! which keeps re-renders from producing redirect loops.

use crate::error::ConsoleError;
use crate::session::{
    clear_session, end_session, session_present, Destination, Navigator, SessionStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Mounted, session not looked at yet
    #[default]
    Unverified,
    /// Session present, protected content may render
    Verified,
    /// Session absent (or just ended), a redirect has been issued
    Redirecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny { redirect: Destination },
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGuard {
    state: GuardState,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Whether protected content may be rendered right now.
    pub fn allows_render(&self) -> bool {
        self.state == GuardState::Verified
    }

    pub fn check_access<S, N>(&mut self, store: &S, navigator: &N) -> Access
    where
        S: SessionStore + ?Sized,
        N: Navigator + ?Sized,
    {
        match self.state {
            GuardState::Verified => Access::Allow,
            GuardState::Redirecting => Access::Deny {
                redirect: Destination::PublicEntry,
            },
            GuardState::Unverified if session_present(store) => {
                log::info!("Session present, entering protected view");
                self.state = GuardState::Verified;
                Access::Allow
            }
            GuardState::Unverified => {
                log::info!("{}, redirecting to login", ConsoleError::SessionAbsent);
                self.state = GuardState::Redirecting;
                navigator.go_to(Destination::PublicEntry);
                Access::Deny {
                    redirect: Destination::PublicEntry,
                }
            }
        }
    }

    /// User-initiated logout: clear the session and leave the protected view.
    pub fn logout<S, N>(&mut self, store: &S, navigator: &N) -> Result<(), ConsoleError>
    where
        S: SessionStore + ?Sized,
        N: Navigator + ?Sized,
    {
        self.state = GuardState::Redirecting;
        end_session(store, navigator)
    }

    /// Logout without a navigator to leave through. The session is still
    /// cleared and the guard stops allowing protected content.
    pub fn revoke<S: SessionStore + ?Sized>(&mut self, store: &S) -> Result<(), ConsoleError> {
        self.state = GuardState::Redirecting;
        clear_session(store)
    }
}
