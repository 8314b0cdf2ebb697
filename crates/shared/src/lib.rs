mod error;
mod normalize;
pub mod pantry;
pub mod profile;
pub mod recipe;

pub use error::*;
pub use normalize::*;
