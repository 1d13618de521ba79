use serde::Deserialize;
use utoipa::IntoParams;

/// `?limit=&offset=` as sent by list endpoints. Both are optional.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// A page window after defaults and caps are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    pub fn from_query(query: PageQuery, default_limit: u64, max_limit: u64) -> Self {
        Self {
            limit: clamp_limit(query.limit, default_limit, max_limit),
            offset: query.offset.unwrap_or(0),
        }
    }
}

/// Missing or zero falls back to `default`; anything above `max` is capped.
pub fn clamp_limit(requested: Option<u64>, default: u64, max: u64) -> u64 {
    match requested {
        None | Some(0) => default,
        Some(n) => n.min(max),
    }
}
