mod analysis;
mod jurisprudence;

pub use analysis::{classify, AnalysisService};
pub use jurisprudence::{JurisprudenceService, DEFAULT_TOP_K};
