//! Pure response handling: payload validation, the status catalog and
//! notification text. Nothing in this crate touches the network.

pub mod catalog;
pub mod formatter;
pub mod validator;

pub use catalog::HomeworkStatus;
pub use formatter::{NO_HOMEWORK_MESSAGE, format_status, status_text};
pub use validator::extract_work_items;
