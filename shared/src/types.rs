//! Common types used across the inventory

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Stock-state filter applied to the catalog view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Low,
    Out,
    Expired,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Low => "low",
            FilterMode::Out => "out",
            FilterMode::Expired => "expired",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(FilterMode::All),
            "low" => Ok(FilterMode::Low),
            "out" => Ok(FilterMode::Out),
            "expired" => Ok(FilterMode::Expired),
            other => Err(InventoryError::InvalidFilter(other.to_string())),
        }
    }
}

/// Brand code used for generated SKUs and backup file names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand(String);

/// Brand code of the default seed catalog
pub const DEFAULT_BRAND: &str = "V254";

impl Brand {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let code = code.trim();
        if code.is_empty() {
            Self(DEFAULT_BRAND.to_string())
        } else {
            Self(code.to_string())
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// SKU derived from the last six digits of the epoch-millisecond clock
    pub fn generate_sku(&self, at: DateTime<Utc>) -> String {
        let millis = at.timestamp_millis().unsigned_abs().to_string();
        let tail = &millis[millis.len().saturating_sub(6)..];
        format!("{}-{}", self.0, tail)
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self(DEFAULT_BRAND.to_string())
    }
}

/// Current time truncated to the millisecond precision of stored timestamps
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Start of the calendar day containing `now`, in `now`'s time zone.
///
/// When local midnight falls in a DST gap, the day starts at the first
/// local minute that exists.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    first_existing_local(now.date_naive(), |local| {
        tz.from_local_datetime(local)
            .earliest()
            .map(|start| start.with_timezone(&Utc))
    })
    .unwrap_or_else(|| now.with_timezone(&Utc))
}

fn first_existing_local<F>(day: NaiveDate, resolve: F) -> Option<DateTime<Utc>>
where
    F: Fn(&NaiveDateTime) -> Option<DateTime<Utc>>,
{
    let midnight = day.and_time(NaiveTime::MIN);
    (0..24 * 60).find_map(|minute| resolve(&(midnight + Duration::minutes(minute))))
}
