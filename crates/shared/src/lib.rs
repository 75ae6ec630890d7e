mod command;
mod entity;
mod pagination;

pub use command::*;
pub use entity::*;
pub use pagination::*;
