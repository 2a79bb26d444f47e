pub mod catalog;
pub mod errors;
pub mod models;
pub mod seed;

pub use catalog::*;
pub use errors::*;
pub use models::*;
