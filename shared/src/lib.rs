//! Core of the OSSC admin console.
//!
//! Everything here is platform independent: the table engine (records,
//! columns, page windows, table views), the session guard and session
//! actions, the dashboard state machine and the GraphQL envelope types.
//! The browser crate supplies storage, navigation and transport.

pub mod api;
pub mod column;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod guard;
pub mod pagination;
pub mod record;
pub mod session;
pub mod table;

pub use api::{ApiError, GraphQlRequest, GraphQlResponse, OsscListing, SignInPayload};
pub use column::{format_date, resolve_cell, Column, ColumnModel, FormatError, Formatter};
pub use config::{ConsoleConfig, CONFIG_STORAGE_KEY};
pub use dashboard::{ossc_columns, DashboardAction, DashboardController};
pub use error::ConsoleError;
pub use fetch::{FetchState, FetchTicket, FetchTracker};
pub use guard::{Access, GuardState, SessionGuard};
pub use pagination::{page_count, visible_slice, PageState, PageWindow, DEFAULT_PAGE_SIZE};
pub use record::{display_value, Record};
pub use session::{
    clear_session, complete_login, end_session, session_present, Destination, LoginForm,
    MemoryStore, Navigator, SessionStore, SessionTokens, LOGIN_FAILED_MESSAGE, SESSION_KEYS,
};
pub use table::{render_grid, Pager, TableGrid, TableView};
