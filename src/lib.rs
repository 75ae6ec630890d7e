pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;
