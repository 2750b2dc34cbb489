use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PitcherStatRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "GS")]
    pub games_started: u32,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "ERA")]
    pub era: f64,
    #[serde(rename = "IP")]
    pub innings_pitched: f64,
    #[serde(rename = "SO")]
    pub strikeouts: u32,
    #[serde(rename = "BB")]
    pub walks: u32,
    #[serde(rename = "WHIP")]
    pub whip: f64,
    #[serde(rename = "Quality_Starts")]
    pub quality_starts: u32,
    #[serde(rename = "Wasted_Starts")]
    pub wasted_starts: u32,
    #[serde(rename = "Wasted_Start_Example", default)]
    pub wasted_start_example: Option<String>,
}

/// Values sent to `/api/stats`. Passed through exactly as the inputs hold
/// them; the backend decides what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameters {
    pub year: String,
    pub league: String,
    pub min_starts: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_quality_starts: u64,
    pub total_wasted_starts: u64,
    pub wasted_rate: String,
    pub pitchers_with_wasted: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSummary {
    pub team: String,
    pub quality_starts: u64,
    pub wasted_starts: u64,
    pub games_started: u64,
    pub wasted_pct: String,
}

/// Query accepted by the dashboard page. Missing values fall back to the
/// default selections.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub year: Option<String>,
    pub league: Option<String>,
    pub min_starts: Option<String>,
}
