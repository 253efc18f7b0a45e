use crate::components::{CreateDialog, DataTable};
use crate::hooks::{use_dashboard, use_session_guard};
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session_guard();
    let dashboard = use_dashboard(session.allowed);

    if !session.allowed {
        return html! {};
    }

    let handle_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let handle_create = {
        let toggle = dashboard.on_toggle_modal.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let handle_retry = {
        let refresh = dashboard.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let view = dashboard.controller.view();
    let failed = matches!(view, shared::TableView::Failed(_));

    html! {
        <div class="dashboard-container">
            <aside class="dashboard-sidebar">
                <img src="image.png" alt="Logo" class="sidebar-logo" />
                <button class="sidebar-create" onclick={handle_create.clone()}>{ "+" }</button>
            </aside>

            <main class="dashboard-main">
                <header class="dashboard-header">
                    <button class="logout-button" onclick={handle_logout}>{ "Logout" }</button>
                    <button class="create-button" onclick={handle_create}>{ "+ Create OSSC" }</button>
                </header>

                <DataTable
                    view={view}
                    title={Some("OSSC Dashboard".to_string())}
                    on_next={dashboard.on_next.clone()}
                    on_previous={dashboard.on_previous.clone()}
                />
                if failed {
                    <button class="retry-button" onclick={handle_retry}>{ "Retry" }</button>
                }
            </main>

            if dashboard.controller.modal_open() {
                <CreateDialog
                    region_options={dashboard.controller.region_options()}
                    on_close={dashboard.on_toggle_modal.clone()}
                />
            }
        </div>
    }
}
