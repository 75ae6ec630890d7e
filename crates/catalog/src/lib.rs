//! Published service offerings shown on the public site.

mod command;
mod query;
mod types;

pub use command::*;
pub use types::*;

#[derive(Clone)]
pub struct ServiceService(pub sqlx::SqlitePool);
