mod case;
mod report;
mod ruling;
mod search;

pub use case::*;
pub use report::*;
pub use ruling::*;
pub use search::*;
