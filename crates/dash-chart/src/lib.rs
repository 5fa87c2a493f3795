//! Chart selection.
//!
//! Validates a user's chart request against the schema profile and produces
//! a declarative chart spec or a tabular preview. A rejected request blocks
//! only that render; the warning text is meant for inline display.

pub mod error;
pub mod select;
pub mod widgets;

pub use error::{ChartError, Result};
pub use select::select;
pub use widgets::{Selections, WidgetSpec, render_widgets};
