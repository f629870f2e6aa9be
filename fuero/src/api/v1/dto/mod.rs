mod analysis;
mod cases;
mod rulings;

pub use analysis::*;
pub use cases::*;
pub use rulings::*;
