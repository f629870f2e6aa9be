mod catalog;
mod vector;

pub use catalog::RulingCatalog;
pub use vector::{IndexSnapshot, VectorIndex};
