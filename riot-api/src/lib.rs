//! Client of the League of Legends REST API.
//!
//! Every endpoint builds its URL, attaches the API key, performs a GET and
//! decodes the JSON answer. Summoner endpoints accepting many identifiers
//! are split in chunks of [`MAX_IDS_PER_REQUEST`] issued concurrently and
//! merged back into a single object.

pub mod api;
pub mod types;

pub use api::{
    client::{ApiClientBase, ReqwestTransport},
    lol::{LegendsClient, MAX_IDS_PER_REQUEST},
    request::{QueryValue, RequestOptions},
    static_data::{StaticDataClient, StaticEndpoint},
};
pub use types::{LegendsApiError, LegendsApiResponse};
