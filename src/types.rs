use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FetchError, FetchResult};

/// One powerstat as the catalog reports it. The catalog sends numbers as
/// strings and uses `"null"` for unknown stats.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum PowerStat {
    Value(i64),
    Unavailable(String),
}

impl PowerStat {
    pub fn value(&self) -> Option<i64> {
        match self {
            PowerStat::Value(v) => Some(*v),
            PowerStat::Unavailable(_) => None,
        }
    }
}

impl From<Value> for PowerStat {
    fn from(raw: Value) -> Self {
        match raw {
            Value::Number(n) => match n.as_i64() {
                Some(v) => PowerStat::Value(v),
                None => PowerStat::Unavailable(n.to_string()),
            },
            Value::String(s) => match s.parse::<i64>() {
                Ok(v) => PowerStat::Value(v),
                Err(_) => PowerStat::Unavailable(s),
            },
            other => PowerStat::Unavailable(other.to_string()),
        }
    }
}

/// Raw catalog response. Every field is optional so that a missing field
/// surfaces as [`FetchError::MissingField`] rather than a parse error.
#[derive(Debug, Deserialize)]
struct HeroPayload {
    response: Option<String>,
    error: Option<String>,
    name: Option<String>,
    powerstats: Option<IndexMap<String, PowerStat>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroRecord {
    pub id: u32,
    pub name: String,
    /// Kept in the order the catalog sent them.
    pub powerstats: IndexMap<String, PowerStat>,
}

impl HeroRecord {
    pub fn from_body(id: u32, body: &str) -> FetchResult<Self> {
        let payload: HeroPayload =
            serde_json::from_str(body).map_err(|source| FetchError::Parse { id, source })?;

        if payload.response.as_deref() == Some("error") {
            return Err(FetchError::Api {
                id,
                message: payload
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let name = payload
            .name
            .ok_or(FetchError::MissingField { id, field: "name" })?;
        let powerstats = payload.powerstats.ok_or(FetchError::MissingField {
            id,
            field: "powerstats",
        })?;

        Ok(Self {
            id,
            name,
            powerstats,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AveragedHero {
    pub id: u32,
    pub name: String,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    FirstStronger,
    SecondStronger,
    Tie,
}
