use anyhow::{Context, Result, bail};
use moka::future::Cache;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the management API with a read-through response cache.
///
/// GET responses are cached by request path. Writes invalidate the written
/// path and its parent collection path, so a stale list is never served
/// after a create, update or delete that went through this client.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    cache: Cache<String, Value>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            cache: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(300))
                .build(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Collection path for an item path, e.g. `/api/employees/emp-1`
    /// invalidates `/api/employees` as well.
    fn parent(path: &str) -> Option<String> {
        let trimmed = path.trim_end_matches('/');
        trimmed
            .rfind('/')
            .filter(|idx| *idx > 0)
            .map(|idx| trimmed[..idx].to_string())
    }

    async fn invalidate(&self, path: &str) {
        self.cache.invalidate(path).await;
        if let Some(parent) = Self::parent(path) {
            self.cache.invalidate(&parent).await;
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        if let Some(hit) = self.cache.get(path).await {
            debug!(path, "cache hit");
            return Ok(hit);
        }
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .with_context(|| format!("GET {path}"))?;
        if !resp.status().is_success() {
            bail!("GET {path} returned {}", resp.status());
        }
        let body: Value = resp.json().await.with_context(|| format!("GET {path}"))?;
        self.cache.insert(path.to_string(), body.clone()).await;
        Ok(body)
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {path}"))?;
        if !resp.status().is_success() {
            bail!("POST {path} returned {}", resp.status());
        }
        self.cache.invalidate(path).await;
        resp.json().await.with_context(|| format!("POST {path}"))
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        let resp = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("PUT {path}"))?;
        if !resp.status().is_success() {
            bail!("PUT {path} returned {}", resp.status());
        }
        self.invalidate(path).await;
        resp.json().await.with_context(|| format!("PUT {path}"))
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .with_context(|| format!("DELETE {path}"))?;
        if !resp.status().is_success() {
            bail!("DELETE {path} returned {}", resp.status());
        }
        self.invalidate(path).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;

    #[test]
    fn parent_of_item_path_is_collection() {
        assert_eq!(
            ApiClient::parent("/api/employees/emp-1").as_deref(),
            Some("/api/employees")
        );
    }

    #[test]
    fn root_segment_has_no_parent() {
        assert_eq!(ApiClient::parent("/api"), None);
    }
}
