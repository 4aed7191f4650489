use legends_shared::constants::ChallengerType;
use serde_json::Value;

use crate::{api::request::RequestOptions, types::LegendsApiResponse};

use super::LegendsClient;

impl LegendsClient {
    pub async fn challenger_leagues(
        &self,
        queue_type: ChallengerType,
    ) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::LEAGUE] challenger_leagues {}", queue_type);
        self.request(
            RequestOptions::new("league/challenger")
                .version("2.3")
                .param("type", queue_type.as_str()),
        )
        .await
    }

    pub async fn league_entries(&self, summoner_id: u64) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::LEAGUE] league_entries {}", summoner_id);
        self.request(
            RequestOptions::new(format!("league/by-summoner/{summoner_id}/entry")).version("2.3"),
        )
        .await
    }

    pub async fn leagues(&self, summoner_id: u64) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::LEAGUE] leagues {}", summoner_id);
        self.request(RequestOptions::new(format!("league/by-summoner/{summoner_id}")).version("2.3"))
            .await
    }
}
