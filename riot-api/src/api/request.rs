use std::fmt;

use legends_shared::{Identifier, Region};
use urlencoding::encode;

/// Root of every game-data and static-data route.
pub const DEFAULT_BASE_URL: &str = "http://prod.api.pvp.net/api/lol";

/// Value of a single query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Rendered as an empty value (`key=`).
    Absent,
    Bool(bool),
    Str(String),
    Int(i64),
    /// Repeats the key once per element.
    List(Vec<QueryValue>),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Absent | QueryValue::List(_) => Ok(()),
            QueryValue::Bool(b) => write!(f, "{b}"),
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<Identifier> for QueryValue {
    fn from(value: Identifier) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Absent, Into::into)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(value: Vec<T>) -> Self {
        QueryValue::List(value.into_iter().map(Into::into).collect())
    }
}

/// Everything needed to build the URL of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: String,
    pub region: Option<Region>,
    pub version: String,
    pub params: Vec<(String, QueryValue)>,
    /// Top level field of the JSON body to return instead of the whole body.
    pub extract: Option<&'static str>,
    /// Route through the static-data service.
    pub static_data: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: String::new(),
            region: None,
            version: "1.1".to_string(),
            params: Vec::new(),
            extract: None,
            static_data: false,
        }
    }
}

impl RequestOptions {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn extract(mut self, field: &'static str) -> Self {
        self.extract = Some(field);
        self
    }

    pub fn static_data(mut self) -> Self {
        self.static_data = true;
        self
    }

    /// Set `key` to `value`, replacing a previous value of the same key in place.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Full URL of the call, `api_key` included when given.
    pub fn url(&self, base_url: &str, default_region: Region, api_key: Option<&str>) -> String {
        let region = self.region.unwrap_or(default_region).as_path();
        let region = if self.static_data {
            format!("static-data/{region}")
        } else {
            region.to_string()
        };

        let version = if self.version.starts_with('v') {
            self.version.clone()
        } else {
            format!("v{}", self.version)
        };

        let mut params = self.params.clone();
        if let Some(key) = api_key {
            match params.iter_mut().find(|(k, _)| k == "api_key") {
                Some((_, v)) => *v = key.into(),
                None => params.push(("api_key".to_string(), key.into())),
            }
        }

        format!(
            "{}/{}/{}/{}?{}",
            base_url.trim_end_matches('/'),
            region,
            version,
            encode_method(&self.method),
            stringify_query(&params)
        )
    }
}

/// Percent-encode a URL component, leaving `!'()*` as they are.
pub fn encode_component(component: &str) -> String {
    encode(component)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Percent-encode each path segment of `method`, dropping empty segments.
pub fn encode_method(method: &str) -> String {
    method
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

pub fn stringify_query(params: &[(String, QueryValue)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            let key = encode_component(key);
            match value {
                QueryValue::List(values) => values
                    .iter()
                    .map(|v| format!("{}={}", key, encode_component(&v.to_string())))
                    .collect::<Vec<_>>()
                    .join("&"),
                v => format!("{}={}", key, encode_component(&v.to_string())),
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
