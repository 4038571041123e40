//! NUI Bridge
//!
//! [`HostBridge`] over the game client's `https://<resource>/<endpoint>`
//! callbacks.

use async_trait::async_trait;
use serde_json::Value;

use super::{BridgeError, Endpoint, HostBridge};

#[derive(Clone, Debug, PartialEq)]
pub struct NuiBridge {
    resource: String,
}

impl NuiBridge {
    pub fn new(resource: impl Into<String>) -> Self {
        Self { resource: resource.into() }
    }

    async fn post(&self, endpoint: Endpoint, body: &Value) -> Result<String, BridgeError> {
        let body = serde_json::to_string(body).map_err(|e| BridgeError::Encode {
            endpoint,
            reason: e.to_string(),
        })?;
        let text = leptos_nui::post_json(&self.resource, endpoint.as_str(), &body).await?;
        Ok(text)
    }
}

#[async_trait(?Send)]
impl HostBridge for NuiBridge {
    async fn request(&self, endpoint: Endpoint, body: Value) -> Result<Value, BridgeError> {
        let text = self.post(endpoint, &body).await?;
        serde_json::from_str(&text).map_err(|e| BridgeError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }

    async fn notify(&self, endpoint: Endpoint, body: Value) -> Result<(), BridgeError> {
        self.post(endpoint, &body).await.map(|_| ())
    }
}
