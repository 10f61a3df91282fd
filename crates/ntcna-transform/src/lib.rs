//! Data transformation for the NTCNA dashboard.
//!
//! - **reshape**: turns one wide (place, year) record into the long
//!   (group, scope) table a comparative bar chart consumes
//! - **frame**: the [`ChartFrame`] produced by reshaping
//! - **filter**: the range/category filter engine over an arbitrary table
//! - **dashboard**: selection state plus the four standard charts
//! - **map_view**: the map focus for a (place, year) selection

pub mod dashboard;
pub mod data_utils;
pub mod error;
pub mod filter;
pub mod frame;
pub mod map_view;
pub mod reshape;

pub use dashboard::Dashboard;
pub use data_utils::{available_years, column_value_string};
pub use error::{Result, TransformError};
pub use filter::{FilterEngine, FilterEvent, FilterObserver, FilterState};
pub use frame::{ChartFrame, GROUP_COLUMN, SCOPE_COLUMN, VALUE_COLUMN};
pub use map_view::{MAX_ZOOM, MIN_ZOOM, MapFocus, map_focus};
pub use reshape::{ReshapeContext, ResolvedColumn, reshape, reshape_chart, resolve_columns};
