use crate::models::{PitcherStatRecord, Summary, TeamSummary};

pub fn build_summary(records: &[PitcherStatRecord]) -> Summary {
    let mut total_quality_starts = 0u64;
    let mut total_wasted_starts = 0u64;
    let mut pitchers_with_wasted = 0usize;

    for record in records {
        total_quality_starts =
            total_quality_starts.saturating_add(u64::from(record.quality_starts));
        total_wasted_starts = total_wasted_starts.saturating_add(u64::from(record.wasted_starts));
        if record.wasted_starts > 0 {
            pitchers_with_wasted += 1;
        }
    }

    Summary {
        total_quality_starts,
        total_wasted_starts,
        wasted_rate: format_percentage(total_wasted_starts, total_quality_starts),
        pitchers_with_wasted,
    }
}

/// Per-team sums, in the order each team first appears in `records`.
pub fn build_team_summary(records: &[PitcherStatRecord]) -> Vec<TeamSummary> {
    let mut teams: Vec<TeamSummary> = Vec::new();

    for record in records {
        let index = match teams.iter().position(|team| team.team == record.team) {
            Some(index) => index,
            None => {
                teams.push(TeamSummary {
                    team: record.team.clone(),
                    ..TeamSummary::default()
                });
                teams.len() - 1
            }
        };
        let team = &mut teams[index];
        team.quality_starts = team.quality_starts.saturating_add(u64::from(record.quality_starts));
        team.wasted_starts = team.wasted_starts.saturating_add(u64::from(record.wasted_starts));
        team.games_started = team.games_started.saturating_add(u64::from(record.games_started));
    }

    for team in &mut teams {
        team.wasted_pct = format_percentage(team.wasted_starts, team.quality_starts);
    }
    teams
}

/// `part / whole` in percent, rounded half-up to one decimal.
/// Zero when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Display form shared by the summary cards, the per-row columns and the
/// team table: `0` for an empty denominator, otherwise one decimal place.
pub fn format_percentage(part: u64, whole: u64) -> String {
    if whole == 0 {
        return "0".to_string();
    }
    format!("{:.1}", percentage(part, whole))
}

pub fn wasted_pct(record: &PitcherStatRecord) -> String {
    format_percentage(u64::from(record.wasted_starts), u64::from(record.quality_starts))
}

/// Quality starts per game started.
pub fn qs_pct(record: &PitcherStatRecord) -> String {
    format_percentage(u64::from(record.quality_starts), u64::from(record.games_started))
}

/// Share of quality starts that were not wasted.
pub fn qs_efficiency(record: &PitcherStatRecord) -> String {
    let kept = record.quality_starts.saturating_sub(record.wasted_starts);
    format_percentage(u64::from(kept), u64::from(record.quality_starts))
}
