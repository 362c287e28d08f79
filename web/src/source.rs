use clueboard_core::{CategoryId, CategorySummary, RawCategory, SourceError, TriviaSource};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "https://jservice.io/api";

/// [`TriviaSource`] backed by a jService-style HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JserviceSource {
    base_url: String,
}

impl JserviceSource {
    #[allow(dead_code)]
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        log::debug!("GET {url}");
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| SourceError::new(err.to_string()))?;
        if !response.ok() {
            return Err(SourceError::new(format!("HTTP {}", response.status())));
        }
        let body = response
            .text()
            .await
            .map_err(|err| SourceError::new(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| SourceError::new(err.to_string()))
    }
}

impl Default for JserviceSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl TriviaSource for JserviceSource {
    async fn list_category_pool(
        &self,
        sample_size: usize,
    ) -> Result<Vec<CategorySummary>, SourceError> {
        let url = format!("{}/categories?count={}", self.base_url, sample_size);
        self.get_json(&url).await
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<RawCategory, SourceError> {
        let url = format!("{}/category?id={}", self.base_url, id);
        self.get_json(&url).await
    }
}
