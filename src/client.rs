use crate::errors::FetchError;
use crate::models::{ErrorBody, PitcherStatRecord, QueryParameters};
use reqwest::{Client, StatusCode};
use std::future::Future;
use tracing::{info, warn};

pub const STATS_PATH: &str = "/api/stats";

/// Source of pitcher stats for the dashboard.
pub trait StatsApi {
    fn fetch_stats(
        &self,
        params: &QueryParameters,
    ) -> impl Future<Output = Result<Vec<PitcherStatRecord>, FetchError>> + Send;
}

#[derive(Clone)]
pub struct HttpStatsApi {
    client: Client,
    base_url: String,
}

impl HttpStatsApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn stats_url(&self) -> String {
        format!("{}{STATS_PATH}", self.base_url)
    }
}

impl StatsApi for HttpStatsApi {
    async fn fetch_stats(
        &self,
        params: &QueryParameters,
    ) -> Result<Vec<PitcherStatRecord>, FetchError> {
        let response = self
            .client
            .get(self.stats_url())
            .query(params)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        let records = decode_stats(status, &body);
        match &records {
            Ok(records) => info!(
                year = %params.year,
                league = %params.league,
                min_starts = %params.min_starts,
                rows = records.len(),
                "fetched stats"
            ),
            Err(err) => warn!(status = status.as_u16(), "stats request failed: {err}"),
        }
        records
    }
}

/// Turns a raw `/api/stats` response into records, or into the message the
/// dashboard should show.
pub fn decode_stats(
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<PitcherStatRecord>, FetchError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error);
        return Err(FetchError::status(status.as_u16(), message));
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FALLBACK_FETCH_MESSAGE;

    #[test]
    fn decodes_success_array_in_order() {
        let body = serde_json::json!([
            {
                "Name": "A", "Team": "NYY", "GS": 20, "W": 10, "L": 5, "ERA": 3.5, "IP": 120,
                "SO": 100, "BB": 30, "WHIP": 1.1, "Quality_Starts": 12, "Wasted_Starts": 3
            },
            {
                "Name": "B", "Team": "TOR", "GS": 18, "W": 6, "L": 7, "ERA": 3.9, "IP": 101.2,
                "SO": 88, "BB": 25, "WHIP": 1.2, "Quality_Starts": 9, "Wasted_Starts": 5
            }
        ])
        .to_string();
        let records = decode_stats(StatusCode::OK, body.as_bytes()).expect("body should decode");
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn error_status_uses_server_message() {
        let err = decode_stats(StatusCode::NOT_FOUND, br#"{"error":"bad year"}"#).unwrap_err();
        assert_eq!(err.to_string(), "bad year");
    }

    #[test]
    fn error_status_without_message_falls_back() {
        let err = decode_stats(StatusCode::INTERNAL_SERVER_ERROR, b"{}").unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_FETCH_MESSAGE);

        let err = decode_stats(StatusCode::BAD_GATEWAY, b"<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_FETCH_MESSAGE);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_stats(StatusCode::OK, b"{\"not\":\"an array\"}").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpStatsApi::new(Client::new(), "http://127.0.0.1:5000/");
        assert_eq!(api.stats_url(), "http://127.0.0.1:5000/api/stats");
    }
}
