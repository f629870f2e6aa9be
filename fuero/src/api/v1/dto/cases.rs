use serde::Deserialize;

fn default_limit() -> u32 {
    5
}

/// Query parameters of `GET /api/v1/cases`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCasesQuery {
    /// Maximum number of cases to return, newest first. Clamped to 1..=100.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl ListCasesQuery {
    pub fn clamped_limit(&self) -> u32 {
        self.limit.clamp(1, 100)
    }
}
