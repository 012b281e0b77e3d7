//! HTTP adapter for the backend's REST resources.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::model::{PathRecord, ReceptionPoint, Totem};
use crate::traits::SpatialPointStore;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub timeout_secs: u64,
    /// Bearer token sent with every request, if any.
    pub access_token: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_prefix: "/api".to_string(),
            timeout_secs: 10,
            access_token: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RestStore {
    config: StoreConfig,
    client: reqwest::blocking::Client,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self, resource: &str) -> String {
        format!(
            "{}{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_prefix.trim_end_matches('/'),
            resource
        )
    }

    fn get(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        let request = self.client.get(url);
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn list<T: DeserializeOwned>(&self, resource: &str, campus: &str) -> Result<Vec<T>, StoreError> {
        let url = self.url(resource);
        let items = self
            .get(&url)
            .query(&[("campus", campus)])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<T>>())
            .inspect_err(|err| warn!(%url, campus, error = %err, "Store request failed"))?;
        debug!(%url, campus, count = items.len(), "Fetched store records");
        Ok(items)
    }
}

impl SpatialPointStore for RestStore {
    fn list_paths(&self, campus: &str) -> Result<Vec<PathRecord>, StoreError> {
        self.list("caminos/", campus)
    }

    fn list_totems(&self, campus: &str) -> Result<Vec<Totem>, StoreError> {
        self.list("totems/", campus)
    }

    fn list_receptions(&self, campus: &str) -> Result<Vec<ReceptionPoint>, StoreError> {
        self.list("recepciones/", campus)
    }

    fn get_totem(&self, id: i64) -> Result<Totem, StoreError> {
        let url = self.url(&format!("totems/{id}/"));
        let response = self.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::TotemNotFound(id));
        }
        Ok(response.error_for_status()?.json::<Totem>()?)
    }
}
