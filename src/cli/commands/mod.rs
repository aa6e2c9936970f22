//! Command implementations

mod add;
mod clear;
mod delete;
mod list;
mod stats;
mod ui;

pub use add::add;
pub use clear::clear;
pub use delete::delete;
pub use list::list;
pub use stats::stats;
pub use ui::ui;
