use crate::client::HttpStatsApi;
use crate::view::DashboardFeatures;

#[derive(Clone)]
pub struct AppState {
    pub api: HttpStatsApi,
    pub features: DashboardFeatures,
}

impl AppState {
    pub fn new(api: HttpStatsApi, features: DashboardFeatures) -> Self {
        Self { api, features }
    }
}
