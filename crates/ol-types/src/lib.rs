pub mod bandit;
pub mod data;
pub mod errors;
pub mod geometry;
pub mod params;

pub use bandit::*;
pub use data::*;
pub use errors::*;
pub use geometry::*;
pub use params::*;
