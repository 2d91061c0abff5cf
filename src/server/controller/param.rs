use serde::Deserialize;
use utoipa::IntoParams;

/// `?limit=` query parameter for endpoints returning a recent suffix of records.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LimitParam {
    /// Maximum number of records to return
    pub limit: Option<u64>,
}

impl LimitParam {
    /// The requested limit, or `default` when absent or zero.
    pub fn or(&self, default: u64) -> u64 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => default,
        }
    }
}
