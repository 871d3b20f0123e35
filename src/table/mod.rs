//! Data-table helpers: cell rendering and bulk actions on selected rows.

pub mod bulk;
pub mod cell;

pub use bulk::{BulkAction, BulkActionOptions, ExtraData, RowSource};
pub use cell::{render, CellValue, RenderMode, Rendered};
