//! Domain models for Stockroom

mod dashboard;
mod movement;
mod product;
mod user;

pub use dashboard::*;
pub use movement::*;
pub use product::*;
pub use user::*;
