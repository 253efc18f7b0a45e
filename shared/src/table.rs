//! Table view: column model + page window -> renderable grid.

use crate::column::ColumnModel;
use crate::error::ConsoleError;
use crate::fetch::FetchState;
use crate::pagination::{PageState, PageWindow};
use crate::record::Record;

/// Header row plus one row of display strings per visible record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// State of the previous/next controls under the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub page_index: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pager {
    /// Controls for an empty sequence: page 1 of 1, both buttons inert.
    pub fn single() -> Self {
        Self {
            page_index: 0,
            page_count: 1,
            has_previous: false,
            has_next: false,
        }
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }
}

impl<T> From<&PageWindow<'_, T>> for Pager {
    fn from(window: &PageWindow<'_, T>) -> Self {
        Self {
            page_index: window.page_index,
            page_count: window.page_count,
            has_previous: window.has_previous,
            has_next: window.has_next,
        }
    }
}

/// What the table area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Failed(String),
    /// No records at all; show the empty-state indicator instead of a grid.
    Empty { pager: Pager },
    Grid { grid: TableGrid, pager: Pager },
}

impl TableView {
    /// Build the view for the current fetch state and page.
    ///
    /// The empty check runs against the full sequence before any slicing, and
    /// a stale page index is clamped onto the last non-empty page.
    pub fn build(records: &FetchState<Vec<Record>>, columns: &ColumnModel, page: PageState) -> Self {
        let records = match records.as_result() {
            Ok(records) => records,
            Err(ConsoleError::FetchFailed(reason)) => return TableView::Failed(reason),
            Err(_) => return TableView::Loading,
        };
        if records.is_empty() {
            return TableView::Empty {
                pager: Pager::single(),
            };
        }
        let window = page.clamp(records.len()).window(records);
        TableView::Grid {
            grid: render_grid(columns, window.slice),
            pager: Pager::from(&window),
        }
    }
}

/// Render headers and one row per record. Pure.
pub fn render_grid(columns: &ColumnModel, records: &[Record]) -> TableGrid {
    TableGrid {
        headers: columns.headers(),
        rows: records.iter().map(|record| columns.row(record)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use serde_json::json;

    fn columns() -> ColumnModel {
        ColumnModel::new(vec![
            Column::new("name", "Name"),
            Column::new("region.name", "Region"),
        ])
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::from_value(json!({"name": format!("row-{}", i)})).unwrap())
            .collect()
    }

    #[test]
    fn pending_renders_loading() {
        let view = TableView::build(&FetchState::Pending, &columns(), PageState::default());
        assert_eq!(view, TableView::Loading);
    }

    #[test]
    fn failure_renders_no_grid() {
        let state = FetchState::Failed("boom".to_string());
        let view = TableView::build(&state, &columns(), PageState::default());
        assert_eq!(view, TableView::Failed("boom".to_string()));
    }

    #[test]
    fn empty_sequence_renders_empty_state() {
        let state = FetchState::Ready(Vec::new());
        // Even a stale page index must not matter for the empty branch
        let page = PageState::new(5).next(100).next(100);
        match TableView::build(&state, &columns(), page) {
            TableView::Empty { pager } => assert_eq!(pager.label(), "Page 1 of 1"),
            other => panic!("expected empty state, got {:?}", other),
        }
    }

    #[test]
    fn grid_has_one_row_per_visible_record() {
        let state = FetchState::Ready(records(12));
        let page = PageState::new(5).next(12).next(12);
        match TableView::build(&state, &columns(), page) {
            TableView::Grid { grid, pager } => {
                assert_eq!(grid.headers, vec!["Name", "Region"]);
                assert_eq!(grid.rows.len(), 2);
                assert_eq!(grid.rows[0], vec!["row-10".to_string(), String::new()]);
                assert!(!pager.has_next);
                assert!(pager.has_previous);
                assert_eq!(pager.label(), "Page 3 of 3");
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn stale_page_index_is_pulled_back_onto_last_page() {
        // Index 2 was reached against a longer sequence
        let page = PageState::new(5).next(100).next(100);
        assert_eq!(page.page_index(), 2);

        let state = FetchState::Ready(records(3));
        match TableView::build(&state, &columns(), page) {
            TableView::Grid { grid, pager } => {
                assert_eq!(grid.rows.len(), 3);
                assert_eq!(pager.label(), "Page 1 of 1");
                assert!(!pager.has_next);
                assert!(!pager.has_previous);
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let state = FetchState::Ready(records(7));
        let page = PageState::new(5).next(7);
        let a = TableView::build(&state, &columns(), page);
        let b = TableView::build(&state, &columns(), page);
        assert_eq!(a, b);
    }

    #[test]
    fn partial_records_keep_other_columns() {
        let rows = vec![
            Record::from_value(json!({"name": "X", "region": {"name": "R"}})).unwrap(),
            Record::from_value(json!({"name": "Y"})).unwrap(),
        ];
        let grid = render_grid(&columns(), &rows);
        assert_eq!(grid.rows[0], vec!["X", "R"]);
        assert_eq!(grid.rows[1], vec!["Y".to_string(), String::new()]);
    }
}
