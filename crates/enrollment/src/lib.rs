//! Views over the registration list: per category statistics, the
//! searchable roster and its spreadsheet export.

pub mod export;
pub mod flatten;
pub mod loader;
pub mod roster;
pub mod statistics;

pub use export::{export_rows, export_rows_in, save_sheet, write_sheet, ExportRow};
pub use flatten::{count_by, flatten};
pub use loader::{Dashboard, DashboardView, Roster, RosterPage, RosterView};
pub use roster::{LocationFilter, RosterQuery, RosterRow};
