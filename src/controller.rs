use crate::client::StatsApi;
use crate::errors::FetchError;
use crate::models::{PitcherStatRecord, QueryParameters};
use crate::stats::{build_summary, build_team_summary, qs_efficiency, qs_pct, wasted_pct};
use crate::view::{DashboardFeatures, DashboardView, StatusKind, StatusLine, TableRow};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Rendered,
    ErrorShown,
}

pub struct StatsDashboardController<A> {
    api: A,
    view: DashboardView,
    features: DashboardFeatures,
    in_flight: bool,
    phase: Phase,
}

impl<A: StatsApi> StatsDashboardController<A> {
    pub fn new(api: A, view: DashboardView, features: DashboardFeatures) -> Self {
        Self {
            api,
            view,
            features,
            in_flight: false,
            phase: Phase::Idle,
        }
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn into_view(self) -> DashboardView {
        self.view
    }

    pub fn features(&self) -> DashboardFeatures {
        self.features
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Initial page load: sync the slider label, then fetch the defaults.
    pub async fn load(&mut self) -> Phase {
        self.bind_inputs();
        self.fetch_and_render().await
    }

    pub fn bind_inputs(&mut self) {
        self.view.min_starts_label = self.view.min_starts.clone();
    }

    /// Slider change listener.
    pub fn on_min_starts_input(&mut self, value: impl Into<String>) {
        self.view.min_starts = value.into();
        self.view.min_starts_label = self.view.min_starts.clone();
    }

    pub async fn fetch_and_render(&mut self) -> Phase {
        let Some(params) = self.begin_fetch() else {
            return self.phase;
        };
        let result = self.api.fetch_stats(&params).await;
        self.complete_fetch(result)
    }

    /// Enters the loading state and returns the query to send, or `None`
    /// when a fetch is already in flight.
    pub fn begin_fetch(&mut self) -> Option<QueryParameters> {
        if self.in_flight {
            debug!("fetch already in flight; ignoring trigger");
            return None;
        }
        self.in_flight = true;
        self.phase = Phase::Loading;

        self.view.trigger_disabled = true;
        self.view.loading_visible = true;
        self.view.error.visible = false;
        self.view.results_visible = false;
        self.view.summary = None;
        self.view.teams = None;
        self.view.status = None;

        Some(self.view.query())
    }

    pub fn complete_fetch(
        &mut self,
        result: Result<Vec<PitcherStatRecord>, FetchError>,
    ) -> Phase {
        if !self.in_flight {
            return self.phase;
        }

        self.phase = match result {
            Ok(records) => {
                self.render(records);
                Phase::Rendered
            }
            Err(err) => {
                error!("failed to load stats: {err}");
                self.view.error.text = err.to_string();
                self.view.error.visible = true;
                Phase::ErrorShown
            }
        };

        self.view.loading_visible = false;
        self.view.trigger_disabled = false;
        self.in_flight = false;
        self.phase
    }

    fn render(&mut self, records: Vec<PitcherStatRecord>) {
        if self.features.summary_cards {
            self.view.summary = Some(build_summary(&records));
        }
        if self.features.team_breakdown {
            self.view.teams = Some(build_team_summary(&records));
        }

        if self.features.status_line {
            self.view.status = Some(if records.is_empty() {
                StatusLine {
                    kind: StatusKind::Empty,
                    message: format!(
                        "No pitchers found with at least {} starts",
                        self.view.min_starts
                    ),
                }
            } else {
                let noun = if records.len() == 1 { "pitcher" } else { "pitchers" };
                StatusLine {
                    kind: StatusKind::Ok,
                    message: format!("Loaded {} {noun}", records.len()),
                }
            });
        }

        let ranked = self.features.ranked_rows;
        self.view.rows.clear();
        let rows = records.into_iter().enumerate().map(|(index, record)| TableRow {
            rank: ranked.then_some(index + 1),
            wasted_pct: ranked.then(|| wasted_pct(&record)),
            qs_pct: ranked.then(|| qs_pct(&record)),
            qs_efficiency: ranked.then(|| qs_efficiency(&record)),
            record,
        });
        self.view.rows.extend(rows);

        // With a status line, an empty result is reported there instead of
        // showing an empty table.
        self.view.results_visible = !(self.features.status_line && self.view.rows.is_empty());
    }
}
