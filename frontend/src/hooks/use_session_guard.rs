//! Hook that gates a protected page on session presence.

use crate::navigation::RouterNavigator;
use crate::storage::BrowserStorage;
use shared::SessionGuard;
use yew::prelude::*;
use yew_router::prelude::*;

/// Return value from the use_session_guard hook.
pub struct UseSessionGuard {
    /// Whether protected content may render. False until the check has run.
    pub allowed: bool,
    /// Clear the session and leave for the login page
    pub logout: Callback<()>,
}

/// Hook for guarding a protected page.
///
/// The guard runs once when the page mounts. Without a session token it
/// issues a single redirect to the login page and `allowed` stays false, so
/// protected content is never rendered.
///
/// # Example
/// ```ignore
/// let session = use_session_guard();
/// if !session.allowed {
///     return html! {};
/// }
/// ```
#[hook]
pub fn use_session_guard() -> UseSessionGuard {
    let navigator = use_navigator();
    let guard = use_mut_ref(SessionGuard::new);
    let allowed = use_state(|| false);

    {
        let guard = guard.clone();
        let allowed = allowed.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            match navigator {
                Some(navigator) => {
                    let access = guard
                        .borrow_mut()
                        .check_access(&BrowserStorage, &RouterNavigator::new(navigator));
                    allowed.set(access.is_allowed());
                }
                None => log::warn!("Protected page mounted outside a router"),
            }
            || ()
        });
    }

    let logout = {
        let allowed = allowed.clone();
        Callback::from(move |_: ()| {
            let mut guard = guard.borrow_mut();
            let result = match navigator.clone() {
                Some(navigator) => guard.logout(&BrowserStorage, &RouterNavigator::new(navigator)),
                None => {
                    log::warn!("Logout outside a router, clearing session only");
                    guard.revoke(&BrowserStorage)
                }
            };
            if let Err(e) = result {
                log::error!("Logout did not fully clear the session: {}", e);
            }
            allowed.set(false);
        })
    };

    UseSessionGuard {
        allowed: *allowed,
        logout,
    }
}
