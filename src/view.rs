use crate::models::{DashboardQuery, PitcherStatRecord, QueryParameters, Summary, TeamSummary};

pub const YEARS: [&str; 3] = ["2025", "2024", "2023"];
pub const LEAGUES: [&str; 5] = ["mlb", "triple-a", "double-a", "high-a", "low-a"];
pub const MIN_STARTS_RANGE: (u32, u32) = (1, 15);

pub const DEFAULT_YEAR: &str = "2024";
pub const DEFAULT_LEAGUE: &str = "mlb";
pub const DEFAULT_MIN_STARTS: &str = "5";

/// Optional parts of the dashboard. Each one was a separate page variant
/// before; now they are switches on a single controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardFeatures {
    pub summary_cards: bool,
    pub ranked_rows: bool,
    pub status_line: bool,
    pub team_breakdown: bool,
}

impl DashboardFeatures {
    pub const ALL: Self = Self {
        summary_cards: true,
        ranked_rows: true,
        status_line: true,
        team_breakdown: true,
    };

    pub const NONE: Self = Self {
        summary_cards: false,
        ranked_rows: false,
        status_line: false,
        team_breakdown: false,
    };

    /// Parses a comma separated list such as `summary,rank`.
    /// `all` and `none` are accepted as shorthands; unknown names are ignored.
    pub fn parse(value: &str) -> Self {
        let mut features = Self::NONE;
        for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "all" => features = Self::ALL,
                "none" => features = Self::NONE,
                "summary" => features.summary_cards = true,
                "rank" => features.ranked_rows = true,
                "status" => features.status_line = true,
                "teams" => features.team_breakdown = true,
                _ => {}
            }
        }
        features
    }
}

impl Default for DashboardFeatures {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub rank: Option<usize>,
    pub wasted_pct: Option<String>,
    pub qs_pct: Option<String>,
    pub qs_efficiency: Option<String>,
    pub record: PitcherStatRecord,
}

/// Element handles for the dashboard. The controller only ever reads and
/// writes through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub year: String,
    pub league: String,
    pub min_starts: String,
    pub min_starts_label: String,
    pub trigger_disabled: bool,
    pub loading_visible: bool,
    pub error: Region,
    pub results_visible: bool,
    pub summary: Option<Summary>,
    pub teams: Option<Vec<TeamSummary>>,
    pub status: Option<StatusLine>,
    pub rows: Vec<TableRow>,
}

impl DashboardView {
    pub fn new(
        year: impl Into<String>,
        league: impl Into<String>,
        min_starts: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            league: league.into(),
            min_starts: min_starts.into(),
            min_starts_label: String::new(),
            trigger_disabled: false,
            loading_visible: false,
            error: Region::default(),
            results_visible: false,
            summary: None,
            teams: None,
            status: None,
            rows: Vec::new(),
        }
    }

    pub fn from_query(query: DashboardQuery) -> Self {
        Self::new(
            query.year.unwrap_or_else(|| DEFAULT_YEAR.to_string()),
            query.league.unwrap_or_else(|| DEFAULT_LEAGUE.to_string()),
            query.min_starts.unwrap_or_else(|| DEFAULT_MIN_STARTS.to_string()),
        )
    }

    pub fn query(&self) -> QueryParameters {
        QueryParameters {
            year: self.year.clone(),
            league: self.league.clone(),
            min_starts: self.min_starts.clone(),
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR, DEFAULT_LEAGUE, DEFAULT_MIN_STARTS)
    }
}
