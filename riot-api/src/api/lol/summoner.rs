use legends_batch::batch_and_merge;
use legends_shared::{Identifier, join_identifiers};
use nonzero_ext::nonzero;
use serde_json::{Map, Value};

use crate::{api::request::RequestOptions, types::LegendsApiResponse};

use super::LegendsClient;

/// Most identifiers the summoner endpoints accept in a single call.
pub const MAX_IDS_PER_REQUEST: usize = 40;

impl LegendsClient {
    /// Request `route(chunk)` for every chunk of `ids` and merge the keyed answers.
    async fn summoner_batch<R>(
        &self,
        ids: &[Identifier],
        route: R,
    ) -> LegendsApiResponse<Map<String, Value>>
    where
        R: Fn(&str) -> String,
    {
        batch_and_merge(ids, nonzero!(MAX_IDS_PER_REQUEST), |chunk| {
            self.request(RequestOptions::new(route(&join_identifiers(chunk))).version("1.3"))
        })
        .await
    }

    pub async fn summoners_by_id(
        &self,
        ids: &[Identifier],
    ) -> LegendsApiResponse<Map<String, Value>> {
        tracing::trace!("[LEGENDS::SUMMONER] summoners_by_id {} ids", ids.len());
        self.summoner_batch(ids, |ids| format!("summoner/{ids}"))
            .await
    }

    pub async fn summoners_by_name(
        &self,
        names: &[Identifier],
    ) -> LegendsApiResponse<Map<String, Value>> {
        tracing::trace!("[LEGENDS::SUMMONER] summoners_by_name {} names", names.len());
        self.summoner_batch(names, |names| format!("summoner/by-name/{names}"))
            .await
    }

    pub async fn runes(&self, ids: &[Identifier]) -> LegendsApiResponse<Map<String, Value>> {
        tracing::trace!("[LEGENDS::SUMMONER] runes {} ids", ids.len());
        self.summoner_batch(ids, |ids| format!("summoner/{ids}/runes"))
            .await
    }

    pub async fn masteries(&self, ids: &[Identifier]) -> LegendsApiResponse<Map<String, Value>> {
        tracing::trace!("[LEGENDS::SUMMONER] masteries {} ids", ids.len());
        self.summoner_batch(ids, |ids| format!("summoner/{ids}/masteries"))
            .await
    }

    pub async fn summoner_names(
        &self,
        ids: &[Identifier],
    ) -> LegendsApiResponse<Map<String, Value>> {
        tracing::trace!("[LEGENDS::SUMMONER] summoner_names {} ids", ids.len());
        self.summoner_batch(ids, |ids| format!("summoner/{ids}/name"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use legends_batch::ids;
    use serde_json::json;

    use super::*;
    use crate::{
        api::{client::tests::MockTransport, lol::tests::client},
        types::LegendsApiError,
    };

    fn url(ids: std::ops::RangeInclusive<u64>, suffix: &str) -> String {
        let ids = ids.map(|i| i.to_string()).collect::<Vec<_>>().join("%2C");
        format!("http://prod.api.pvp.net/api/lol/euw/v1.3/summoner/{ids}{suffix}?api_key=KEY")
    }

    fn body(ids: std::ops::RangeInclusive<u64>) -> String {
        let map: Map<String, Value> = ids
            .map(|i| (i.to_string(), json!({ "id": i })))
            .collect();
        Value::Object(map).to_string()
    }

    #[tokio::test]
    async fn summoners_by_id_splits_in_chunks_of_forty() {
        let (api, transport) = client(
            MockTransport::default()
                .respond(&url(1..=40, ""), &body(1..=40))
                .respond(&url(41..=80, ""), &body(41..=80))
                .respond(&url(81..=97, ""), &body(81..=97)),
        );

        let summoners = api
            .summoners_by_id(&ids![(1..=97u64).collect::<Vec<_>>()])
            .await
            .unwrap();

        assert_eq!(summoners.len(), 97);
        assert_eq!(summoners["81"], json!({ "id": 81 }));
        let mut seen = transport.seen();
        seen.sort();
        let mut expected = vec![url(1..=40, ""), url(41..=80, ""), url(81..=97, "")];
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn one_failing_chunk_fails_the_call() {
        let (api, _) = client(
            MockTransport::default()
                .respond(&url(1..=40, "/runes"), &body(1..=40))
                .fail(&url(41..=80, "/runes"), 500)
                .respond(&url(81..=97, "/runes"), &body(81..=97)),
        );

        let res = api
            .runes(&ids![(1..=97u64).collect::<Vec<_>>()])
            .await;

        assert!(matches!(res, Err(LegendsApiError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn no_identifiers_means_no_request() {
        let (api, transport) = client(MockTransport::default());

        assert!(api.masteries(&[]).await.unwrap().is_empty());
        assert!(api.summoner_names(&ids![]).await.unwrap().is_empty());
        assert!(transport.seen().is_empty());
    }

    #[tokio::test]
    async fn names_are_encoded_in_path() {
        let url = "http://prod.api.pvp.net/api/lol/euw/v1.3/summoner/by-name/Le%20Conservateur%2CChalop?api_key=KEY";
        let (api, _) = client(MockTransport::default().respond(
            url,
            r#"{"leconservateur":{"id":1},"chalop":{"id":2}}"#,
        ));

        let summoners = api
            .summoners_by_name(&ids!["Le Conservateur", "Chalop"])
            .await
            .unwrap();

        assert_eq!(summoners["chalop"], json!({ "id": 2 }));
    }
}
