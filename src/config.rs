use std::env;

use legends_riot_api::api::request::DEFAULT_BASE_URL;
use legends_shared::Region;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var("RIOT_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let region = match var("RIOT_REGION") {
            Some(region) => {
                Region::try_from(region).map_err(|e| AppError::InvalidRegion(e.0))?
            }
            None => Region::default(),
        };

        let base_url = var("LEGENDS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Ok(Self {
            api_key,
            region,
            base_url,
        })
    }
}
