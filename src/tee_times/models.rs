use serde::{Deserialize, Serialize};

/// A single tee-time record as delivered by the source document.
/// `when_iso` is the authoritative instant; `date_iso` and `time_hhmm` are
/// local-time display hints and never participate in resolution.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeeTimeRecord {
    #[serde(rename = "whenISO", default, skip_serializing_if = "Option::is_none")]
    pub when_iso: Option<String>,
    #[serde(rename = "dateISO", default, skip_serializing_if = "Option::is_none")]
    pub date_iso: Option<String>,
    #[serde(rename = "timeHHMM", default, skip_serializing_if = "Option::is_none")]
    pub time_hhmm: Option<String>,
}

/// The document fetched from the source URL. Read once per run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeeTimeDocument {
    #[serde(rename = "nextTee", default, skip_serializing_if = "Option::is_none")]
    pub next_tee: Option<TeeTimeRecord>,
    #[serde(rename = "todayTee", default, skip_serializing_if = "Option::is_none")]
    pub today_tee: Option<TeeTimeRecord>,
}

/// UTC date and hour derived from the selected tee time. Derived, never
/// persisted.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    /// Fixed-width YYYYMMDD date token, UTC
    pub utc_date: String,
    /// Two-digit hour token (00-23), UTC
    pub utc_hour: String,
    /// The record the target was derived from
    pub source_tee: TeeTimeRecord,
}

impl ResolvedTarget {
    /// The token Ventusky accepts in its `t=` query parameter: `YYYYMMDD/HH`.
    pub fn t_param(&self) -> String {
        format!("{}/{}", self.utc_date, self.utc_hour)
    }
}
