use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::ranking::Ranker;
use crate::screening::orchestrator::InFlight;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ranking backend. Default: HttpRanker against RANKING_API_URL.
    pub ranker: Arc<dyn Ranker>,
    /// The one screening session. Never locked across the ranking call.
    pub session: Arc<RwLock<Session>>,
    pub in_flight: InFlight,
}

impl AppState {
    pub fn new(config: Config, ranker: Arc<dyn Ranker>) -> Self {
        Self {
            config,
            ranker,
            session: Arc::new(RwLock::new(Session::default())),
            in_flight: InFlight::default(),
        }
    }
}
