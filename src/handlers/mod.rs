pub mod filter_handlers;

pub use filter_handlers::{apply_cli_filters, describe_active_filters};
