use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request for the pool workload dashboard
///
/// Serialized into the query string (`start_hour=7&end_hour=21`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolWorkloadRequest {
    pub start_hour: u32,
    pub end_hour: u32,
}

/// Response for the pool workload dashboard
///
/// The response is a complete snapshot: the frontend replaces its slot set
/// wholesale, there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolWorkloadResponse {
    /// Occupancy sample for the current hour
    #[serde(default)]
    pub current_now: Option<CurrentNow>,
    /// Server clock metadata
    #[serde(default)]
    pub meta: Option<WorkloadMeta>,
    /// Availability slots, at most one per (date, hour) pair
    #[serde(default)]
    pub slots: Vec<PoolWorkloadSlot>,
}

/// One availability slot: a (date, hour) pair with known free capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolWorkloadSlot {
    /// Calendar date ("YYYY-MM-DD")
    pub date: NaiveDate,
    /// Hour of day, start of the one-hour slot
    pub hour: u32,
    /// People counted in the pool during this hour, if measured
    #[serde(default)]
    pub current: Option<u32>,
    pub free_lanes: u32,
    #[serde(default)]
    pub busy_lanes: u32,
    #[serde(default)]
    pub total_lanes: u32,
    pub free_places: u32,
    #[serde(default)]
    pub total_places: u32,
}

/// Occupancy of the pool right now, as reported by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentNow {
    pub date: NaiveDate,
    pub hour: u32,
    /// `None` when no measurement exists for the current hour
    #[serde(default)]
    pub current: Option<u32>,
    pub source: CurrentSource,
}

/// Where the `current` value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrentSource {
    CurrentHour,
    PreviousHour,
    None,
    Error,
    #[serde(other)]
    Other,
}

impl CurrentSource {
    /// Short user-facing note, `None` for a regular measurement
    pub fn note(&self) -> Option<&'static str> {
        match self {
            CurrentSource::PreviousHour => Some("данные предыдущего часа"),
            CurrentSource::None => Some("нет данных"),
            CurrentSource::Error => Some("ошибка"),
            _ => None,
        }
    }
}

/// Server clock metadata attached to every workload response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadMeta {
    pub server_now_date: NaiveDate,
    pub server_now_hour: u32,
    /// Server timezone offset in minutes
    pub tz_offset: i32,
}
