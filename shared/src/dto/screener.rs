use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Trend direction relative to the 200-day SMA
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Close above the SMA
    #[default]
    Long,
    /// Close below the SMA
    Short,
}

impl Trend {
    pub fn all() -> &'static [Trend] {
        &[Trend::Long, Trend::Short]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Long => "Long (price above SMA)",
            Trend::Short => "Short (price below SMA)",
        }
    }
}

/// How the SMA percentage thresholds are evaluated over the year of data
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SmaMode {
    /// First and second half of the year are checked separately
    #[default]
    TwoHalves,
    /// The whole year is checked as one period
    EntireYear,
}

impl SmaMode {
    pub fn all() -> &'static [SmaMode] {
        &[SmaMode::TwoHalves, SmaMode::EntireYear]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SmaMode::TwoHalves => "Two halves",
            SmaMode::EntireYear => "Entire year",
        }
    }
}

/// SMA thresholds that apply to the selected mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmaThresholds {
    TwoHalves { first: f64, second: f64 },
    EntireYear { entire: f64 },
}

/// Query parameters of `GET /screener`.
///
/// All seven parameters are always sent; the server only reads the
/// thresholds that belong to `mode`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Minimum average daily volume over the last year
    pub volume: u64,
    /// Maximum ATR ratio in percent
    pub max_ratr: f64,
    pub trend: Trend,
    pub mode: SmaMode,
    /// Percentage of days on the trend side of the SMA, first half
    pub sma_pct_first: f64,
    /// Percentage of days on the trend side of the SMA, second half
    pub sma_pct_second: f64,
    /// Percentage of days on the trend side of the SMA, whole year
    pub sma_pct_entire: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            volume: 500_000,
            max_ratr: 999.0,
            trend: Trend::Long,
            mode: SmaMode::TwoHalves,
            sma_pct_first: 80.0,
            sma_pct_second: 100.0,
            sma_pct_entire: 100.0,
        }
    }
}

impl FilterCriteria {
    pub fn active_thresholds(&self) -> SmaThresholds {
        match self.mode {
            SmaMode::TwoHalves => SmaThresholds::TwoHalves {
                first: self.sma_pct_first,
                second: self.sma_pct_second,
            },
            SmaMode::EntireYear => SmaThresholds::EntireYear {
                entire: self.sma_pct_entire,
            },
        }
    }
}

/// One matching symbol returned by the screener
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockResult {
    pub symbol: String,
    pub avg_1yr_volume: u64,
    /// ATR ratio in percent
    pub atr_ratio: f64,
    pub last_price: f64,
    /// `YYYY-MM-DD` from the reference server, RFC 3339 also accepted
    pub last_update: String,
}

impl StockResult {
    /// Parse `last_update` into a timestamp.
    ///
    /// Returns `None` when the server sent something that is neither a date
    /// nor a date-time.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        let raw = self.last_update.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
    }
}

/// Body of a successful `GET /screener`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScreenerResponse {
    pub results: Vec<StockResult>,
    /// Per-ticker problems on the server side; diagnostic only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_found: Option<usize>,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
