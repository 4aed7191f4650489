use serde_json::Value;

use crate::{
    api::request::{QueryValue, RequestOptions},
    types::LegendsApiResponse,
};

use super::LegendsClient;

/// `SEASON{n}` query value, sent empty when no season is requested.
fn season_param(season: Option<u16>) -> QueryValue {
    season.map(|s| format!("SEASON{s}")).into()
}

impl LegendsClient {
    pub async fn summary_stats(
        &self,
        summoner_id: u64,
        season: Option<u16>,
    ) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::STATS] summary_stats {} {:?}", summoner_id, season);
        self.request(
            RequestOptions::new(format!("stats/by-summoner/{summoner_id}/summary"))
                .version("1.2")
                .param("season", season_param(season))
                .extract("playerStatSummaries"),
        )
        .await
    }

    pub async fn ranked_stats(
        &self,
        summoner_id: u64,
        season: Option<u16>,
    ) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::STATS] ranked_stats {} {:?}", summoner_id, season);
        self.request(
            RequestOptions::new(format!("stats/by-summoner/{summoner_id}/ranked"))
                .version("1.2")
                .param("season", season_param(season))
                .extract("champions"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::{client::tests::MockTransport, lol::tests::client};

    #[tokio::test]
    async fn summary_stats_with_and_without_season() {
        let with = "http://prod.api.pvp.net/api/lol/euw/v1.2/stats/by-summoner/5/summary?season=SEASON3&api_key=KEY";
        let without = "http://prod.api.pvp.net/api/lol/euw/v1.2/stats/by-summoner/5/summary?season=&api_key=KEY";
        let (api, _) = client(
            MockTransport::default()
                .respond(with, r#"{"playerStatSummaries":[1]}"#)
                .respond(without, r#"{"playerStatSummaries":[2]}"#),
        );

        assert_eq!(api.summary_stats(5, Some(3)).await.unwrap(), json!([1]));
        assert_eq!(api.summary_stats(5, None).await.unwrap(), json!([2]));
    }

    #[tokio::test]
    async fn ranked_stats_extracts_champions() {
        let url = "http://prod.api.pvp.net/api/lol/euw/v1.2/stats/by-summoner/5/ranked?season=SEASON4&api_key=KEY";
        let (api, _) = client(MockTransport::default().respond(url, r#"{"champions":[{"id":0}]}"#));

        assert_eq!(
            api.ranked_stats(5, Some(4)).await.unwrap(),
            json!([{ "id": 0 }])
        );
    }
}
