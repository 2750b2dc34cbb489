use crate::controller::StatsDashboardController;
use crate::errors::AppError;
use crate::models::DashboardQuery;
use crate::state::AppState;
use crate::ui::render_dashboard;
use crate::view::DashboardView;
use axum::{
    extract::{Query, RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let mut controller = StatsDashboardController::new(
        state.api.clone(),
        DashboardView::from_query(query),
        state.features,
    );
    controller.load().await;

    let features = controller.features();
    Html(render_dashboard(&controller.into_view(), features))
}

/// Relays `/api/stats` to the configured backend, keeping its status, body
/// and content type.
pub async fn get_stats(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let mut url = state.api.stats_url();
    if let Some(query) = query.filter(|query| !query.is_empty()) {
        url.push('?');
        url.push_str(&query);
    }

    let upstream = state.api.client().get(&url).send().await.map_err(|err| {
        warn!("stats backend unreachable: {err}");
        AppError::from(err)
    })?;
    let status = StatusCode::from_u16(upstream.status().as_u16()).map_err(AppError::internal)?;
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| HeaderValue::from_bytes(value.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let body = upstream.bytes().await?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
