mod client;
mod parse;

pub use client::PortalClient;
pub use parse::extract_title_matches;
