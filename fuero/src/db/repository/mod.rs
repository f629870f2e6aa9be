mod cases;

pub use cases::CaseRepository;
