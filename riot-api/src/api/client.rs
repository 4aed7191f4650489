use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use legends_shared::{
    Region,
    traits::api::{ApiError, ApiRequest},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{LegendsApiError, LegendsApiResponse};

use super::{
    metrics::RequestMetrics,
    request::{DEFAULT_BASE_URL, RequestOptions},
};

/// HTTP GET transport backed by reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApiRequest for ReqwestTransport {
    async fn request(&self, url: String) -> Result<Bytes, ApiError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(LegendsApiError::Reqwest)?;

        let status = res.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(LegendsApiError::from_status(status.as_u16()).into());
        }

        Ok(res.bytes().await.map_err(LegendsApiError::Reqwest)?)
    }
}

/// Shared request machinery: API key, default region and transport.
#[derive(Debug)]
pub struct ApiClientBase {
    transport: Arc<dyn ApiRequest>,
    /// League of Legends API key
    key: Option<String>,
    region: Region,
    base_url: String,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClientBase {
    pub fn new(api_key: impl Into<String>, region: Region) -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::default()),
            key: Some(api_key.into()),
            region,
            base_url: DEFAULT_BASE_URL.to_string(),
            metrics: RequestMetrics::new("legends"),
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn ApiRequest>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue requests without an `api_key` parameter.
    pub fn without_key(mut self) -> Self {
        self.key = None;
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, options: &RequestOptions) -> String {
        options.url(&self.base_url, self.region, self.key.as_deref())
    }

    /// Perform the call described by `options` and decode its JSON body,
    /// narrowed to the extracted field when one is set.
    pub async fn request<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
    ) -> LegendsApiResponse<T> {
        tracing::trace!(
            "[LEGENDS::CLIENT] GET {}",
            options.url(&self.base_url, self.region, None)
        );
        self.metrics.inc();

        let result = self.fetch(&options).await;
        if let Err(e) = &result {
            self.metrics.fail();
            tracing::debug!("[LEGENDS::CLIENT] {} failed: {}", options.method, e);
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, options: &RequestOptions) -> LegendsApiResponse<T> {
        let raw = self
            .transport
            .request(self.url(options))
            .await
            .map_err(LegendsApiError::from_transport)?;

        let mut data: Value = serde_json::from_slice(&raw)?;
        if let Some(field) = options.extract {
            data = match data {
                Value::Object(mut map) => map.remove(field).unwrap_or(Value::Null),
                _ => Value::Null,
            };
        }

        Ok(serde_json::from_value(data)?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use serde_json::json;

    use super::*;

    /// Transport answering from a fixed table and recording every URL it saw.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        pub responses: HashMap<String, Result<String, u16>>,
        pub seen: Mutex<Vec<String>>,
    }

    impl MockTransport {
        pub fn respond(mut self, url: &str, body: &str) -> Self {
            self.responses.insert(url.to_string(), Ok(body.to_string()));
            self
        }

        pub fn fail(mut self, url: &str, status: u16) -> Self {
            self.responses.insert(url.to_string(), Err(status));
            self
        }

        pub fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ApiRequest for MockTransport {
        async fn request(&self, url: String) -> Result<Bytes, ApiError> {
            self.seen.lock().unwrap().push(url.clone());
            match self.responses.get(&url) {
                Some(Ok(body)) => Ok(Bytes::from(body.clone())),
                Some(Err(status)) => Err(LegendsApiError::from_status(*status).into()),
                None => Err(LegendsApiError::from_status(404).into()),
            }
        }
    }

    const CHAMPION_URL: &str = "http://prod.api.pvp.net/api/lol/na/v1.1/champion?api_key=KEY";

    fn base(transport: MockTransport) -> (ApiClientBase, Arc<MockTransport>) {
        let transport = Arc::new(transport);
        let client = ApiClientBase::new("KEY", Region::Na).with_transport(transport.clone());
        (client, transport)
    }

    #[tokio::test]
    async fn request_decodes_whole_body() {
        let (client, transport) =
            base(MockTransport::default().respond(CHAMPION_URL, r#"{"champions":[1]}"#));

        let body: Value = client.request(RequestOptions::new("champion")).await.unwrap();

        assert_eq!(body, json!({ "champions": [1] }));
        assert_eq!(transport.seen(), vec![CHAMPION_URL.to_string()]);
        assert_eq!(client.metrics.snapshot().requests, 1);
    }

    #[tokio::test]
    async fn request_extracts_field() {
        let (client, _) = base(
            MockTransport::default().respond(CHAMPION_URL, r#"{"champions":[{"id":1}]}"#),
        );

        let champions: Vec<HashMap<String, u32>> = client
            .request(RequestOptions::new("champion").extract("champions"))
            .await
            .unwrap();
        assert_eq!(champions[0]["id"], 1);

        let missing: Value = client
            .request(RequestOptions::new("champion").extract("nope"))
            .await
            .unwrap();
        assert_eq!(missing, Value::Null);
    }

    #[tokio::test]
    async fn request_surfaces_status_errors() {
        let (client, _) = base(MockTransport::default().fail(CHAMPION_URL, 401));

        let res: LegendsApiResponse<Value> = client.request(RequestOptions::new("champion")).await;

        assert!(matches!(
            res,
            Err(LegendsApiError::Status { status: 401, ref message }) if message == "Unauthorized"
        ));
        assert_eq!(client.metrics.snapshot().failures, 1);
    }

    #[tokio::test]
    async fn request_surfaces_parse_errors() {
        let (client, _) = base(MockTransport::default().respond(CHAMPION_URL, "<html>"));

        let res: LegendsApiResponse<Value> = client.request(RequestOptions::new("champion")).await;

        assert!(matches!(res, Err(LegendsApiError::Serde(_))));
    }

    #[tokio::test]
    async fn request_propagates_reqwest_error() {
        let client =
            ApiClientBase::new("KEY", Region::Na).with_base_url("ht!tp://invalid-url"); // incorrect schema

        let res: LegendsApiResponse<Value> = client.request(RequestOptions::new("champion")).await;

        assert!(matches!(res, Err(LegendsApiError::Reqwest(_))));
    }
}
