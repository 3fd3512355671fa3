use crate::error::TransportError;
use crate::models::whitelist::{WhitelistRequest, WhitelistResponse};
use async_trait::async_trait;

/// The remote whitelist service as the engine sees it: one request in, one
/// user-facing message out. Retry and timeout policy live with the caller's
/// HTTP stack, not here.
#[async_trait]
pub trait WhitelistApi: Send + Sync {
    async fn send(&self, request: &WhitelistRequest) -> Result<WhitelistResponse, TransportError>;
}

pub struct WhitelistClient {
    client: reqwest::Client,
    base_url: String,
}

impl WhitelistClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl WhitelistApi for WhitelistClient {
    async fn send(&self, request: &WhitelistRequest) -> Result<WhitelistResponse, TransportError> {
        let url = format!("{}/whitelist", self.base_url);

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error while connecting to whitelist API: {}", e);
                return Err(TransportError::Connectivity);
            }
        };

        let status = response.status();
        if status.is_client_error() {
            tracing::error!("Whitelist API rejected request {:?}: {}", request, status);
            return Err(TransportError::Client);
        }
        if status.is_server_error() {
            tracing::error!("Whitelist API failed on request {:?}: {}", request, status);
            return Err(TransportError::Server);
        }

        response.json::<WhitelistResponse>().await.map_err(|e| {
            tracing::error!("Undecodable whitelist API response: {}", e);
            TransportError::Server
        })
    }
}
