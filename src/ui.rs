use crate::models::{Summary, TeamSummary};
use crate::view::{
    DashboardFeatures, DashboardView, StatusKind, StatusLine, TableRow, LEAGUES,
    MIN_STARTS_RANGE, YEARS,
};
use std::fmt::Write;

pub fn render_dashboard(view: &DashboardView, features: DashboardFeatures) -> String {
    let trigger_disabled = if view.trigger_disabled { " disabled" } else { "" };
    INDEX_HTML
        .replace("{{YEAR_OPTIONS}}", &render_options(&YEARS, &view.year, str::to_string))
        .replace("{{LEAGUE_OPTIONS}}", &render_options(&LEAGUES, &view.league, str::to_uppercase))
        .replace("{{MIN_STARTS_MIN}}", &MIN_STARTS_RANGE.0.to_string())
        .replace("{{MIN_STARTS_MAX}}", &MIN_STARTS_RANGE.1.to_string())
        .replace("{{MIN_STARTS}}", &escape_html(&view.min_starts))
        .replace("{{MIN_STARTS_LABEL}}", &escape_html(&view.min_starts_label))
        .replace("{{TRIGGER_DISABLED}}", trigger_disabled)
        .replace("{{LOADING_HIDDEN}}", hidden_attr(!view.loading_visible))
        .replace("{{ERROR_HIDDEN}}", hidden_attr(!view.error.visible))
        .replace("{{ERROR}}", &escape_html(&view.error.text))
        .replace("{{SUMMARY}}", &render_summary(features, view.summary.as_ref()))
        .replace("{{STATUS}}", &render_status(features, view.status.as_ref()))
        .replace("{{RESULTS_HIDDEN}}", hidden_attr(!view.results_visible))
        .replace("{{TABLE_HEAD}}", &render_head(features))
        .replace("{{TEAMS}}", &render_teams(features, view.teams.as_deref()))
        .replace("{{TABLE_ROWS}}", &render_rows(&view.rows))
}

fn hidden_attr(hidden: bool) -> &'static str {
    if hidden { " hidden" } else { "" }
}

fn render_options(values: &[&str], selected: &str, label: fn(&str) -> String) -> String {
    let mut html = String::new();
    let mut found = false;
    for value in values {
        let is_selected = *value == selected;
        found |= is_selected;
        let _ = write!(
            html,
            r#"<option value="{value}"{}>{}</option>"#,
            if is_selected { " selected" } else { "" },
            escape_html(&label(value))
        );
    }
    // Keep whatever was requested selectable so the form resubmits it.
    if !found && !selected.is_empty() {
        let escaped = escape_html(selected);
        let _ = write!(html, r#"<option value="{escaped}" selected>{escaped}</option>"#);
    }
    html
}

/// Cards only exist once a fetch has produced numbers to put in them.
fn render_summary(features: DashboardFeatures, summary: Option<&Summary>) -> String {
    let Some(summary) = summary.filter(|_| features.summary_cards) else {
        return String::new();
    };
    let mut html = String::from(r#"<section id="summaryCards" class="panel">"#);
    let cards = [
        (
            "Total quality starts",
            "totalQS",
            "value",
            summary.total_quality_starts.to_string(),
        ),
        (
            "Total wasted starts",
            "totalWasted",
            "value wasted",
            summary.total_wasted_starts.to_string(),
        ),
        (
            "Wasted rate",
            "wastedRate",
            "value wasted",
            format!("{}%", summary.wasted_rate),
        ),
        (
            "Pitchers with wasted starts",
            "pitchersWithWasted",
            "value",
            summary.pitchers_with_wasted.to_string(),
        ),
    ];
    for (label, id, class, value) in cards {
        let _ = write!(
            html,
            r#"
      <div class="stat">
        <span class="label">{label}</span>
        <span id="{id}" class="{class}">{value}</span>
      </div>"#
        );
    }
    html.push_str("\n    </section>");
    html
}

fn render_status(features: DashboardFeatures, status: Option<&StatusLine>) -> String {
    if !features.status_line {
        return String::new();
    }
    match status {
        Some(status) => {
            let kind = match status.kind {
                StatusKind::Ok => "ok",
                StatusKind::Empty => "empty",
            };
            format!(
                r#"<div class="status" id="status" data-type="{kind}">{}</div>"#,
                escape_html(&status.message)
            )
        }
        None => r#"<div class="status" id="status"></div>"#.to_string(),
    }
}

fn render_head(features: DashboardFeatures) -> String {
    let mut columns: Vec<&str> = Vec::new();
    if features.ranked_rows {
        columns.push("#");
    }
    columns.extend(["Name", "Team", "GS", "W", "L", "ERA", "IP", "SO", "BB", "WHIP"]);
    columns.extend(["QS", "Wasted"]);
    if features.ranked_rows {
        columns.extend(["Wasted %", "QS %", "QS Efficiency"]);
    }
    columns.push("Example");

    columns.iter().fold(String::new(), |mut html, column| {
        let _ = write!(html, "<th>{column}</th>");
        html
    })
}

fn render_rows(rows: &[TableRow]) -> String {
    let mut html = String::new();
    for row in rows {
        let record = &row.record;
        html.push_str("<tr>");
        if let Some(rank) = row.rank {
            let _ = write!(html, "<td><strong>#{rank}</strong></td>");
        }
        let _ = write!(
            html,
            "<td><strong>{}</strong></td><td>{}</td>",
            escape_html(&record.name),
            escape_html(&record.team)
        );
        let numbers = [
            record.games_started.to_string(),
            record.wins.to_string(),
            record.losses.to_string(),
            record.era.to_string(),
            record.innings_pitched.to_string(),
            record.strikeouts.to_string(),
            record.walks.to_string(),
            record.whip.to_string(),
        ];
        for number in numbers {
            let _ = write!(html, r#"<td class="stat-number">{number}</td>"#);
        }
        let _ = write!(
            html,
            r#"<td class="quality-high">{}</td><td class="wasted-high">{}</td>"#,
            record.quality_starts, record.wasted_starts
        );
        if let Some(pct) = &row.wasted_pct {
            let _ = write!(html, r#"<td class="wasted-high">{pct}%</td>"#);
        }
        if let Some(pct) = &row.qs_pct {
            let _ = write!(html, r#"<td class="stat-number">{pct}%</td>"#);
        }
        if let Some(pct) = &row.qs_efficiency {
            let _ = write!(html, r#"<td class="quality-high">{pct}%</td>"#);
        }
        let example = record.wasted_start_example.as_deref().unwrap_or("");
        let _ = write!(html, r#"<td class="example">{}</td>"#, escape_html(example));
        html.push_str("</tr>\n");
    }
    html
}

fn render_teams(features: DashboardFeatures, teams: Option<&[TeamSummary]>) -> String {
    let Some(teams) = teams.filter(|teams| features.team_breakdown && !teams.is_empty()) else {
        return String::new();
    };
    let mut html = String::from(
        r#"<section id="teamsContainer">
      <h2>Team comparison</h2>
      <table id="teamsTable">
        <thead><tr><th>Team</th><th>GS</th><th>QS</th><th>Wasted</th><th>Wasted %</th></tr></thead>
        <tbody>
"#,
    );
    for team in teams {
        let _ = writeln!(
            html,
            concat!(
                r#"<tr><td>{}</td><td class="stat-number">{}</td>"#,
                r#"<td class="quality-high">{}</td><td class="wasted-high">{}</td>"#,
                r#"<td class="wasted-high">{}%</td></tr>"#,
            ),
            escape_html(&team.team),
            team.games_started,
            team.quality_starts,
            team.wasted_starts,
            team.wasted_pct
        );
    }
    html.push_str("        </tbody>\n      </table>\n    </section>");
    html
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wasted Starts Tracker</title>
  <style>
    :root {
      --bg-1: #eef3f8;
      --ink: #1f2a36;
      --accent: #c8352b;
      --accent-2: #1d4e89;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(29, 78, 137, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #dfe8f2 60%, #f6f8fb 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1200px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5b6573;
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: end;
      gap: 18px;
    }

    .controls label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #6c7684;
    }

    select, input[type="range"] {
      font-size: 1rem;
      padding: 6px 8px;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button:disabled {
      opacity: 0.5;
      cursor: progress;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(29, 78, 137, 0.1);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7a8491;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.wasted {
      color: var(--accent);
    }

    .loading {
      color: var(--accent-2);
      font-weight: 600;
    }

    .error {
      background: #fdecea;
      color: #a12a20;
      border-radius: 12px;
      padding: 12px 16px;
    }

    .status {
      color: #5b6573;
      min-height: 1.2em;
    }

    .status[data-type="empty"] {
      color: #a06b00;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      font-size: 0.92rem;
    }

    th, td {
      padding: 8px 10px;
      border-bottom: 1px solid #e3e8ee;
      text-align: left;
    }

    th {
      background: var(--accent-2);
      color: white;
      position: sticky;
      top: 0;
    }

    .stat-number {
      text-align: right;
      font-variant-numeric: tabular-nums;
    }

    .quality-high {
      color: #2d7a4b;
      font-weight: 600;
    }

    .wasted-high {
      color: var(--accent);
      font-weight: 600;
    }

    .example {
      color: #6c7684;
      font-size: 0.85rem;
    }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Wasted Starts Tracker</h1>
      <p class="subtitle">Quality starts that didn't result in wins.</p>
    </header>

    <form id="controls" class="controls" method="get" action="/">
      <label>Season
        <select id="yearSelect" name="year">{{YEAR_OPTIONS}}</select>
      </label>
      <label>League
        <select id="leagueSelect" name="league">{{LEAGUE_OPTIONS}}</select>
      </label>
      <label>Minimum starts: <span id="minStartsValue">{{MIN_STARTS_LABEL}}</span>
        <input id="minStartsSlider" name="min_starts" type="range"
          min="{{MIN_STARTS_MIN}}" max="{{MIN_STARTS_MAX}}" value="{{MIN_STARTS}}" />
      </label>
      <button id="fetchBtn" type="submit"{{TRIGGER_DISABLED}}>Load Data</button>
    </form>

    <div id="loading" class="loading"{{LOADING_HIDDEN}}>Loading stats...</div>
    <div id="error" class="error"{{ERROR_HIDDEN}}>{{ERROR}}</div>

    {{SUMMARY}}
    {{STATUS}}

    <section id="statsContainer"{{RESULTS_HIDDEN}}>
      <table id="statsTable">
        <thead><tr>{{TABLE_HEAD}}</tr></thead>
        <tbody>
{{TABLE_ROWS}}        </tbody>
      </table>
    </section>

    {{TEAMS}}
  </main>

  <script>
    const slider = document.getElementById('minStartsSlider');
    const label = document.getElementById('minStartsValue');
    slider.addEventListener('input', () => {
      label.textContent = slider.value;
    });

    document.getElementById('controls').addEventListener('submit', () => {
      document.getElementById('fetchBtn').disabled = true;
      document.getElementById('loading').hidden = false;
      document.getElementById('error').hidden = true;
      for (const id of ['statsContainer', 'summaryCards', 'teamsContainer']) {
        const section = document.getElementById(id);
        if (section) {
          section.hidden = true;
        }
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PitcherStatRecord;

    fn row(name: &str, rank: Option<usize>) -> TableRow {
        TableRow {
            rank,
            wasted_pct: rank.map(|_| "25.0".to_string()),
            qs_pct: rank.map(|_| "60.0".to_string()),
            qs_efficiency: rank.map(|_| "75.0".to_string()),
            record: PitcherStatRecord {
                name: name.to_string(),
                team: "NYY".to_string(),
                games_started: 20,
                wins: 10,
                losses: 5,
                era: 3.5,
                innings_pitched: 120.0,
                strikeouts: 100,
                walks: 30,
                whip: 1.1,
                quality_starts: 12,
                wasted_starts: 3,
                wasted_start_example: Some("2023-04-02 (IP:7.0, ER:1, Dec:ND)".into()),
            },
        }
    }

    #[test]
    fn escapes_markup_in_record_text() {
        assert_eq!(
            escape_html(r#"<b>"O'Neil" & co</b>"#),
            "&lt;b&gt;&quot;O&#39;Neil&quot; &amp; co&lt;/b&gt;"
        );
    }

    #[test]
    fn record_text_cannot_inject_placeholders() {
        let mut view = DashboardView::default();
        view.error.text = "{{TABLE_ROWS}}".to_string();
        view.error.visible = true;
        let html = render_dashboard(&view, DashboardFeatures::ALL);
        assert!(html.contains("&#123;&#123;TABLE_ROWS}}"));
    }

    #[test]
    fn renders_rows_with_rank_and_pct() {
        let mut view = DashboardView::new("2023", "mlb", "10");
        view.rows = vec![row("X", Some(1)), row("<Y>", Some(2))];
        view.results_visible = true;
        view.summary = Some(Summary {
            total_quality_starts: 24,
            total_wasted_starts: 6,
            wasted_rate: "25.0".to_string(),
            pitchers_with_wasted: 2,
        });

        let html = render_dashboard(&view, DashboardFeatures::ALL);
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<td><strong>#1</strong></td><td><strong>X</strong></td>"));
        assert!(html.contains("&lt;Y&gt;"));
        assert!(html.contains(r#"<td class="wasted-high">25.0%</td>"#));
        assert!(html.contains(r#"<td class="stat-number">60.0%</td>"#));
        assert!(html.contains(r#"<td class="quality-high">75.0%</td>"#));
        assert!(html.contains("<th>QS Efficiency</th>"));
        assert!(html.contains(r#"<span id="wastedRate" class="value wasted">25.0%</span>"#));
        assert!(html.contains(r#"<option value="2023" selected>2023</option>"#));
        assert!(html.contains(r#"<section id="statsContainer">"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn plain_variant_omits_optional_parts() {
        let mut view = DashboardView::new("2024", "mlb", "5");
        view.rows = vec![row("X", None)];
        let html = render_dashboard(&view, DashboardFeatures::NONE);
        assert!(!html.contains("totalQS"));
        assert!(!html.contains(r#"id="status""#));
        assert!(!html.contains("<th>#</th>"));
        assert!(!html.contains("<th>Wasted %</th>"));
        assert!(!html.contains("<th>QS %</th>"));
        assert!(!html.contains("teamsTable"));
    }

    #[test]
    fn team_breakdown_renders_one_row_per_team() {
        let mut view = DashboardView::default();
        view.teams = Some(vec![
            TeamSummary {
                team: "TOR".to_string(),
                quality_starts: 12,
                wasted_starts: 5,
                games_started: 40,
                wasted_pct: "41.7".to_string(),
            },
            TeamSummary {
                team: "NYY".to_string(),
                quality_starts: 0,
                wasted_starts: 0,
                games_started: 8,
                wasted_pct: "0".to_string(),
            },
        ]);

        let html = render_dashboard(&view, DashboardFeatures::ALL);
        let tor = html.find("<tr><td>TOR</td>").expect("TOR row");
        let nyy = html.find("<tr><td>NYY</td>").expect("NYY row");
        assert!(tor < nyy);
        assert!(html.contains(r#"<td class="wasted-high">41.7%</td></tr>"#));
        assert!(html.contains(r#"<td class="wasted-high">0%</td></tr>"#));

        let without = render_dashboard(&view, DashboardFeatures::parse("summary,rank,status"));
        assert!(!without.contains("teamsTable"));
    }

    #[test]
    fn error_and_loading_regions_follow_view() {
        let mut view = DashboardView::new("1999", "mlb", "5");
        view.error.text = "bad year".to_string();
        view.error.visible = true;
        let html = render_dashboard(&view, DashboardFeatures::ALL);
        assert!(html.contains(r#"<div id="error" class="error">bad year</div>"#));
        assert!(html.contains(r#"<div id="loading" class="loading" hidden>"#));
        assert!(html.contains(r#"<option value="1999" selected>1999</option>"#));
    }

    #[test]
    fn failed_fetch_has_no_summary_cards() {
        let mut view = DashboardView::default();
        view.error.text = "No data available".to_string();
        view.error.visible = true;

        let html = render_dashboard(&view, DashboardFeatures::ALL);
        assert!(html.contains(r#"<div id="error" class="error">No data available</div>"#));
        assert!(!html.contains("totalQS"));
        assert!(!html.contains("wastedRate"));
        assert!(!html.contains("teamsTable"));
    }
}
