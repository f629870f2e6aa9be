use std::time::Duration;

use url::Url;

use crate::config::PortalConfig;
use crate::error::{FueroError, Result};

/// HTTP client for the public jurisprudence portal. Fixed User-Agent and a
/// bounded timeout so a hanging portal cannot stall a request indefinitely.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PortalClient {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET the portal landing page as raw HTML.
    ///
    /// Network failure, timeout and non-2xx statuses all surface as
    /// [`FueroError::Portal`], recoverable by the caller and never fatal to
    /// the process.
    pub async fn fetch_page(&self) -> Result<String> {
        let response = self
            .http
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| FueroError::Portal(format!("no se pudo conectar con {}: {e}", self.base_url)))?;

        let response = response
            .error_for_status()
            .map_err(|e| FueroError::Portal(format!("respuesta inválida de {}: {e}", self.base_url)))?;

        response
            .text()
            .await
            .map_err(|e| FueroError::Portal(format!("error leyendo {}: {e}", self.base_url)))
    }
}
