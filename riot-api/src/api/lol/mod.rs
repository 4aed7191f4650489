use std::sync::Arc;

use legends_shared::Region;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::LegendsApiResponse;

use super::{client::ApiClientBase, request::RequestOptions, static_data::StaticDataClient};

pub mod league;
pub mod stats;
pub mod summoner;

pub use summoner::MAX_IDS_PER_REQUEST;

/// High level client exposing one method per game-data endpoint.
#[derive(Debug, Clone)]
pub struct LegendsClient(Arc<ApiClientBase>);

impl LegendsClient {
    /// Create a new API client using the provided key and default region.
    pub fn new(api_key: impl Into<String>, region: Region) -> Self {
        Self::from_base(ApiClientBase::new(api_key, region))
    }

    pub fn from_base(base: ApiClientBase) -> Self {
        Self(Arc::new(base))
    }

    pub fn base(&self) -> &ApiClientBase {
        &self.0
    }

    /// Client of the static-data endpoints sharing this client's key and region.
    pub fn static_data(&self) -> StaticDataClient {
        StaticDataClient::new(self.0.clone())
    }

    /// Raw access to any endpoint.
    pub async fn request<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
    ) -> LegendsApiResponse<T> {
        self.0.request(options).await
    }

    pub fn log_metrics(&self) {
        self.0.metrics.log_summary();
    }

    pub async fn champions(&self, free_to_play: bool) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::CHAMPION] champions free_to_play={}", free_to_play);
        self.request(
            RequestOptions::new("champion")
                .version("1.1")
                .param("freeToPlay", free_to_play)
                .extract("champions"),
        )
        .await
    }

    pub async fn recent_games(&self, summoner_id: u64) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::GAME] recent_games {}", summoner_id);
        self.request(
            RequestOptions::new(format!("game/by-summoner/{summoner_id}/recent"))
                .version("1.3")
                .extract("games"),
        )
        .await
    }

    pub async fn teams(&self, summoner_id: u64) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::TEAM] teams {}", summoner_id);
        self.request(RequestOptions::new(format!("team/by-summoner/{summoner_id}")).version("2.2"))
            .await
    }
}
