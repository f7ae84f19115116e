pub mod dialogs;
pub mod formatting;
pub mod report;
pub mod types;
pub mod updates;

pub use dialogs::{set_status, show_error};
pub use types::{StatusLevel, ViewOptions};
pub use updates::{render_json, render_markdown};
