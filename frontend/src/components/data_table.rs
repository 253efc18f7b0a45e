use shared::{ConsoleError, Pager, TableGrid, TableView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub view: TableView,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
    #[prop_or_default]
    pub title: Option<String>,
}

/// Loading / error / empty / grid presentation of a [`TableView`].
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    match &props.view {
        TableView::Loading => html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Loading..." }</p>
            </div>
        },
        TableView::Failed(reason) => html! {
            <p class="error-message">
                { ConsoleError::FetchFailed(reason.clone()).to_string() }
            </p>
        },
        TableView::Empty { pager } => html! {
            <div class="empty-state">
                <h2>{ "No documents" }</h2>
                <p>{ "Start creating OSSC data" }</p>
                <span class="page-label">{ pager.label() }</span>
            </div>
        },
        TableView::Grid { grid, pager } => html! {
            <div class="table-container">
                if let Some(title) = &props.title {
                    <h1 class="table-title">{ title }</h1>
                }
                <div class="table-scroll">
                    <GridTable grid={grid.clone()} />
                </div>
                <PagerControls
                    pager={pager.clone()}
                    on_next={props.on_next.clone()}
                    on_previous={props.on_previous.clone()}
                />
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct GridTableProps {
    grid: TableGrid,
}

#[function_component(GridTable)]
fn grid_table(props: &GridTableProps) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    { for props.grid.headers.iter().map(|header| html! { <th>{ header }</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    props.grid.rows.iter().map(|row| html! {
                        <tr>
                            { for row.iter().map(|cell| html! { <td>{ cell }</td> }) }
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
struct PagerControlsProps {
    pager: Pager,
    on_next: Callback<()>,
    on_previous: Callback<()>,
}

#[function_component(PagerControls)]
fn pager_controls(props: &PagerControlsProps) -> Html {
    let on_previous = {
        let callback = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };
    let on_next = {
        let callback = props.on_next.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="pager">
            <button
                class="pager-button"
                onclick={on_previous}
                disabled={!props.pager.has_previous}
            >
                { "Previous" }
            </button>
            <span class="page-label">{ props.pager.label() }</span>
            <button
                class="pager-button"
                onclick={on_next}
                disabled={!props.pager.has_next}
            >
                { "Next" }
            </button>
        </div>
    }
}
