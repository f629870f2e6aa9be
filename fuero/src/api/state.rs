use std::sync::Arc;

use crate::config::Config;
use crate::db::CaseStore;
use crate::embeddings::TextEncoder;
use crate::error::Result;
use crate::index::RulingCatalog;
use crate::scraper::PortalClient;
use crate::services::{AnalysisService, JurisprudenceService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn CaseStore>,
    pub catalog: Arc<RulingCatalog>,
    pub jurisprudence: Arc<JurisprudenceService>,
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn CaseStore>,
        encoder: Arc<dyn TextEncoder>,
    ) -> Result<Self> {
        let config = Arc::new(config);
        let catalog = Arc::new(RulingCatalog::new(encoder.clone()));
        let portal = PortalClient::new(&config.portal)?;
        let jurisprudence = Arc::new(JurisprudenceService::new(
            portal,
            catalog.clone(),
            encoder,
        ));
        let analysis = Arc::new(AnalysisService::new(store.clone(), jurisprudence.clone()));

        Ok(Self {
            config,
            store,
            catalog,
            jurisprudence,
            analysis,
        })
    }
}
