//! Custom Yew hooks for the frontend application.
//!
//! These hooks wire the console core into components: the session guard on
//! protected pages and the dashboard state with its record fetching.

mod use_dashboard;
mod use_session_guard;

pub use use_dashboard::{use_dashboard, UseDashboard};
pub use use_session_guard::{use_session_guard, UseSessionGuard};
