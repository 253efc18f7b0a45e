//! Dashboard state and its transitions.
//!
//! [`DashboardController`] owns the fetched records, the page position and the
//! create-dialog flag. Every transition consumes the current state and returns
//! the next one, so an outer event loop (the Yew reducer in the frontend) only
//! has to feed it actions.

use crate::column::{format_date, Column, ColumnModel};
use crate::fetch::{FetchState, FetchTicket};
use crate::pagination::PageState;
use crate::record::Record;
use crate::table::TableView;

/// The OSSC listing columns, in display order.
pub fn ossc_columns() -> ColumnModel {
    ColumnModel::new(vec![
        Column::new("name", "OSSC Name"),
        Column::new("region.name", "Region ID"),
        Column::new("subcity.name", "Subcity Name"),
        Column::new("created_at", "Created At").with_formatter(format_date),
    ])
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    NextPage,
    PreviousPage,
    ToggleModal,
    /// A request was issued; only its result will be accepted.
    FetchStarted(FetchTicket),
    FetchFinished(FetchTicket, Result<Vec<Record>, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardController {
    records: FetchState<Vec<Record>>,
    page: PageState,
    modal_open: bool,
    columns: ColumnModel,
    awaiting: Option<FetchTicket>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(PageState::default().page_size())
    }
}

impl DashboardController {
    pub fn new(page_size: usize) -> Self {
        Self::with_columns(ossc_columns(), page_size)
    }

    pub fn with_columns(columns: ColumnModel, page_size: usize) -> Self {
        Self {
            records: FetchState::Pending,
            page: PageState::new(page_size),
            modal_open: false,
            columns,
            awaiting: None,
        }
    }

    pub fn records(&self) -> &FetchState<Vec<Record>> {
        &self.records
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    fn total(&self) -> usize {
        self.records.ready().map_or(0, Vec::len)
    }

    pub fn next_page(self) -> Self {
        let page = self.page.next(self.total());
        Self { page, ..self }
    }

    pub fn previous_page(self) -> Self {
        let page = self.page.previous();
        Self { page, ..self }
    }

    pub fn toggle_modal(self) -> Self {
        Self {
            modal_open: !self.modal_open,
            ..self
        }
    }

    /// Remember `ticket` as the only request whose result still matters.
    ///
    /// Records already on screen stay visible while a refetch is in flight.
    /// Anything else (first load, retry after a failure) shows as loading.
    pub fn begin_fetch(self, ticket: FetchTicket) -> Self {
        let records = match self.records {
            FetchState::Ready(records) => FetchState::Ready(records),
            _ => FetchState::Pending,
        };
        Self {
            records,
            awaiting: Some(ticket),
            ..self
        }
    }

    /// Apply a fetch result. Results for superseded tickets are dropped.
    ///
    /// A successful result replaces the whole sequence and resets the page.
    pub fn finish_fetch(self, ticket: FetchTicket, result: Result<Vec<Record>, String>) -> Self {
        if self.awaiting != Some(ticket) {
            log::debug!("Dropping stale fetch result {:?}", ticket);
            return self;
        }
        match &result {
            Ok(records) => log::info!("Loaded {} records", records.len()),
            Err(reason) => log::error!("Failed to fetch records: {}", reason),
        }
        let records = FetchState::from(result);
        Self {
            records,
            page: self.page.reset(),
            awaiting: None,
            ..self
        }
    }

    pub fn apply(self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::NextPage => self.next_page(),
            DashboardAction::PreviousPage => self.previous_page(),
            DashboardAction::ToggleModal => self.toggle_modal(),
            DashboardAction::FetchStarted(ticket) => self.begin_fetch(ticket),
            DashboardAction::FetchFinished(ticket, result) => self.finish_fetch(ticket, result),
        }
    }

    pub fn view(&self) -> TableView {
        TableView::build(&self.records, &self.columns, self.page)
    }

    /// Distinct region names in first-seen order, for the create dialog.
    pub fn region_options(&self) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for record in self.records.ready().into_iter().flatten() {
            if let Some(name) = record.resolve("region.name").and_then(|v| v.as_str()) {
                if !name.is_empty() && !options.iter().any(|o| o == name) {
                    options.push(name.to_string());
                }
            }
        }
        options
    }
}
