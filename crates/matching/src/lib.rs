mod catalog;
mod engine;
mod filter;
mod lookup;
mod options;
mod ranker;
pub mod subscore;

pub use catalog::*;
pub use engine::*;
pub use filter::*;
pub use lookup::*;
pub use options::*;
pub use ranker::*;
