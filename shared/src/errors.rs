use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown region: {0}")]
pub struct RegionParseError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown challenger league type: {0}")]
pub struct ChallengerTypeParseError(pub String);
