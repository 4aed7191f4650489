use std::fmt;

use serde::{Deserialize, Serialize};

use errors::RegionParseError;

pub mod constants;
pub mod errors;
pub mod traits;

/// Platforms served by the League of Legends REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Na,
    Euw,
    Eune,
    Br,
    Tr,
    Las,
    Kr,
    Lan,
    Oce,
    Ru,
}

impl Region {
    /// Regions accepted by the game-data endpoints.
    pub const API: [Region; 6] = [
        Region::Na,
        Region::Euw,
        Region::Eune,
        Region::Br,
        Region::Tr,
        Region::Las,
    ];

    /// Regions accepted by the static-data endpoints.
    pub const STATIC_DATA: [Region; 10] = [
        Region::Na,
        Region::Euw,
        Region::Eune,
        Region::Br,
        Region::Tr,
        Region::Las,
        Region::Kr,
        Region::Lan,
        Region::Oce,
        Region::Ru,
    ];

    /// Lowercase form used as a path segment of request URLs.
    pub fn as_path(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Euw => "euw",
            Region::Eune => "eune",
            Region::Br => "br",
            Region::Tr => "tr",
            Region::Las => "las",
            Region::Kr => "kr",
            Region::Lan => "lan",
            Region::Oce => "oce",
            Region::Ru => "ru",
        }
    }

    pub fn has_game_data(&self) -> bool {
        Self::API.contains(self)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_path().to_uppercase()
    }
}

impl TryFrom<&str> for Region {
    type Error = RegionParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::STATIC_DATA
            .into_iter()
            .find(|r| r.as_path().eq_ignore_ascii_case(value))
            .ok_or_else(|| RegionParseError(value.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = RegionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Region::try_from(value.as_str())
    }
}

/// A summoner id or a summoner name, as accepted by the batched endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(u64),
    Name(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{n}"),
            Identifier::Name(name) => f.write_str(name),
        }
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::Number(value)
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Number(value.into())
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        match u64::try_from(value) {
            Ok(n) => Identifier::Number(n),
            Err(_) => Identifier::Name(value.to_string()),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Name(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Name(value)
    }
}

impl From<&Identifier> for Identifier {
    fn from(value: &Identifier) -> Self {
        value.clone()
    }
}

/// Join identifiers the way the batched endpoints expect them in a path.
pub fn join_identifiers(ids: &[Identifier]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
