pub mod catalog;
pub mod config;
pub mod todo;

pub use catalog::*;
pub use config::*;
pub use todo::*;
