mod provider;

pub use provider::{LocalEncoder, TextEncoder};
