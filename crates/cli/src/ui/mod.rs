//! Terminal UI components for hookmsg
//!
//! - Reminder rendering and the confirmation prompt
//! - Icons

pub mod icons;
pub mod presenter;

pub use icons::{Icons, StatusIcon};
pub use presenter::{InputOpener, MessagePresenter, format_message, parse_confirmation};
