use std::{fmt, str::FromStr, sync::Arc};

use legends_shared::Identifier;
use serde_json::Value;
use thiserror::Error;

use crate::types::LegendsApiResponse;

use super::{client::ApiClientBase, request::RequestOptions};

/// Resources served by the static-data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticEndpoint {
    Champion,
    Item,
    Mastery,
    Rune,
    SummonerSpell,
}

impl StaticEndpoint {
    pub const ALL: [StaticEndpoint; 5] = [
        StaticEndpoint::Champion,
        StaticEndpoint::Item,
        StaticEndpoint::Mastery,
        StaticEndpoint::Rune,
        StaticEndpoint::SummonerSpell,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            StaticEndpoint::Champion => "champion",
            StaticEndpoint::Item => "item",
            StaticEndpoint::Mastery => "mastery",
            StaticEndpoint::Rune => "rune",
            StaticEndpoint::SummonerSpell => "summoner-spell",
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            StaticEndpoint::Champion => "champions",
            StaticEndpoint::Item => "items",
            StaticEndpoint::Mastery => "masteries",
            StaticEndpoint::Rune => "runes",
            StaticEndpoint::SummonerSpell => "summoner-spells",
        }
    }
}

impl fmt::Display for StaticEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown static-data resource: {0}")]
pub struct StaticEndpointParseError(pub String);

impl FromStr for StaticEndpoint {
    type Err = StaticEndpointParseError;

    /// Accepts the route name and its plural, dashed or camel cased
    /// (`summoner-spell`, `summonerSpells`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('-', "").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| {
                e.path().replace('-', "") == wanted || e.plural().replace('-', "") == wanted
            })
            .ok_or_else(|| StaticEndpointParseError(s.to_string()))
    }
}

/// Client of the static-data endpoints.
#[derive(Debug, Clone)]
pub struct StaticDataClient(Arc<ApiClientBase>);

impl StaticDataClient {
    pub fn new(api_client: Arc<ApiClientBase>) -> Self {
        Self(api_client)
    }

    fn options(method: impl Into<String>) -> RequestOptions {
        RequestOptions::new(method).version("1").static_data()
    }

    /// One resource by id, or the `data` map of every resource without one.
    pub async fn get(
        &self,
        endpoint: StaticEndpoint,
        id: Option<Identifier>,
    ) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::STATIC] {} {:?}", endpoint, id);

        let options = match id {
            Some(id) => Self::options(format!("{}/{}", endpoint.path(), id)),
            None => Self::options(endpoint.path()).extract("data"),
        };

        self.0.request(options).await
    }

    pub async fn champions(&self) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Champion, None).await
    }

    pub async fn champion(&self, id: impl Into<Identifier>) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Champion, Some(id.into())).await
    }

    pub async fn items(&self) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Item, None).await
    }

    pub async fn item(&self, id: impl Into<Identifier>) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Item, Some(id.into())).await
    }

    pub async fn masteries(&self) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Mastery, None).await
    }

    pub async fn mastery(&self, id: impl Into<Identifier>) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Mastery, Some(id.into())).await
    }

    pub async fn runes(&self) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Rune, None).await
    }

    pub async fn rune(&self, id: impl Into<Identifier>) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::Rune, Some(id.into())).await
    }

    pub async fn summoner_spells(&self) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::SummonerSpell, None).await
    }

    pub async fn summoner_spell(&self, id: impl Into<Identifier>) -> LegendsApiResponse<Value> {
        self.get(StaticEndpoint::SummonerSpell, Some(id.into())).await
    }

    pub async fn realm(&self) -> LegendsApiResponse<Value> {
        tracing::trace!("[LEGENDS::STATIC] realm");
        self.0.request(Self::options("realm")).await
    }
}
