// src/state.rs
use crate::config::SiteConfig;
use crate::domain::catalog::CatalogError;
use crate::domain::{Catalog, LeadSink, LogLeadSink};

/// Everything a request handler reads. Shared by reference across workers.
pub struct AppState {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub leads: Box<dyn LeadSink + Send + Sync>,
}

impl AppState {
    /// Fails when the seeded listings break a catalog invariant.
    pub fn new(config: SiteConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            config,
            catalog: Catalog::seeded()?,
            leads: Box::new(LogLeadSink::default()),
        })
    }

    pub fn with_leads(mut self, leads: Box<dyn LeadSink + Send + Sync>) -> Self {
        self.leads = leads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_from_the_validated_seed() {
        let state = AppState::new(SiteConfig::default()).unwrap();
        assert_eq!(state.catalog.len(), 6);
        assert!(state.catalog.find("6").is_some());
    }
}
