mod create_dialog;
mod data_table;

pub use create_dialog::CreateDialog;
pub use data_table::DataTable;
