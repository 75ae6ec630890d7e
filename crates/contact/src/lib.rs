//! Contact inquiries: visitor submissions and their staff-side lifecycle.

mod command;
mod query;
mod types;

pub use command::*;
pub use types::*;

/// Handle over the store for every inquiry read and state transition.
#[derive(Clone)]
pub struct ContactService(pub sqlx::SqlitePool);
