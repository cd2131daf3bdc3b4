pub mod calculations;
pub mod models;

pub use calculations::evaluate;
pub use models::*;
