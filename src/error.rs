use thiserror::Error;

/// Failures that end a run. Per-stat problems never show up here.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for hero {id} failed: {source}")]
    Transport {
        id: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("request for hero {id} returned HTTP {status}")]
    Status { id: u32, status: reqwest::StatusCode },

    #[error("response for hero {id} is not valid JSON: {source}")]
    Parse {
        id: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog rejected hero {id}: {message}")]
    Api { id: u32, message: String },

    #[error("response for hero {id} has no `{field}` field")]
    MissingField { id: u32, field: &'static str },
}

pub type FetchResult<T> = Result<T, FetchError>;
