//! Client for the supported-chains listing endpoint
//!
//! One-shot GET, JSON-decoded into the core model. No retries, no
//! caching; a failed fetch surfaces as an error to the caller.

use chainscope_core::ChainList;
use reqwest::Client;
use url::Url;

pub struct SupportedChainsApi {
    base: Url,
    client: Client,
}

impl SupportedChainsApi {
    pub fn new(client: Client, base: Url) -> Self {
        Self { base, client }
    }

    pub async fn supported_chains(&self) -> reqwest::Result<ChainList> {
        tracing::debug!(url = self.base.as_str(), "fetching supported chains");
        let list: ChainList = self
            .client
            .get(self.base.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!(chains = list.chains.len(), "fetched chain document");
        Ok(list)
    }
}
