//! Hook holding the dashboard state and fetching its records.

use crate::graphql;
use crate::storage::load_config;
use shared::{DashboardAction, DashboardController, FetchTracker};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Reducer wrapper so the core controller can drive `use_reducer`.
#[derive(Clone, PartialEq)]
pub struct DashboardState(pub DashboardController);

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(DashboardState(self.0.clone().apply(action)))
    }
}

/// Return value from the use_dashboard hook.
pub struct UseDashboard {
    /// Current dashboard state
    pub controller: DashboardController,
    /// Issue a new fetch; the previous one's result will be ignored
    pub refresh: Callback<()>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_toggle_modal: Callback<()>,
}

/// Hook for the dashboard's records, page and dialog state.
///
/// Records are fetched once `enabled` becomes true (i.e. after the session
/// guard has allowed the page) and again on every `refresh`.
#[hook]
pub fn use_dashboard(enabled: bool) -> UseDashboard {
    let config = use_memo((), |_| load_config());
    let page_size = config.page_size;
    let state = use_reducer(move || DashboardState(DashboardController::new(page_size)));
    let tracker = use_mut_ref(FetchTracker::new);
    let refresh_trigger = use_state(|| 0u32);

    let fetch_records = {
        let state = state.clone();
        let endpoint = config.graphql_path.clone();
        Callback::from(move |_: ()| {
            let ticket = tracker.borrow_mut().issue();
            state.dispatch(DashboardAction::FetchStarted(ticket));

            let dispatcher = state.dispatcher();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let result = graphql::fetch_osscs(&endpoint)
                    .await
                    .map_err(|e| e.to_string());
                dispatcher.dispatch(DashboardAction::FetchFinished(ticket, result));
            });
        })
    };

    {
        let refresh = *refresh_trigger;
        use_effect_with((enabled, refresh), move |(enabled, _)| {
            if *enabled {
                fetch_records.emit(());
            }
            || ()
        });
    }

    let refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    let dispatch = |action: DashboardAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action.clone()))
    };

    UseDashboard {
        controller: state.0.clone(),
        refresh,
        on_next: dispatch(DashboardAction::NextPage),
        on_previous: dispatch(DashboardAction::PreviousPage),
        on_toggle_modal: dispatch(DashboardAction::ToggleModal),
    }
}
