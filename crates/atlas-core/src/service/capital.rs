// crates/atlas-core/src/service/capital.rs
use crate::error::{AtlasError, Result};
use crate::model::Capital;
use crate::pagination::{paginate, Page, PageRequest};
use crate::query::{filter_capitals, SearchCriteria};
use crate::repository::CapitalRepository;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CapitalService {
    repository: Arc<CapitalRepository>,
}

impl CapitalService {
    pub fn new(repository: Arc<CapitalRepository>) -> Self {
        Self { repository }
    }

    /// Name search and optional sort, then paginate.
    pub fn list_capitals(&self, pagination: PageRequest, criteria: &SearchCriteria) -> Result<Page<Capital>> {
        let all = self.repository.get_all()?;
        let matched = filter_capitals(&all, criteria)?;
        Ok(paginate(&matched, pagination).cloned())
    }

    pub fn get_by_name(&self, name: &str) -> Result<Capital> {
        self.repository.get_by_key(name)?.ok_or_else(|| {
            tracing::info!(name, "capital not found");
            AtlasError::not_found(format!("Capital '{name}' not found"), json!({ "name": name }))
        })
    }
}
