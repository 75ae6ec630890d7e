mod contact;
mod service;

pub use service::*;
