use tracing::{debug, info, warn};

use crate::config::HiscoresConfig;
use crate::endpoint::select_endpoint;
use crate::enrich::{Clock, SystemClock, process_hiscores_response};
use crate::error::{Error, Result};
use crate::network::{HiscoresResponse, HiscoresTransport, ReqwestTransport};
use crate::stats::ParsedStats;

/// Marker of the upstream maintenance page. Real payloads are bare CSV.
const HTML_MARKER: &str = "<!doctype html>";

/// Client for the Hiscores lite endpoints.
///
/// Issues exactly one request per call. Retrying outages is left to the caller.
pub struct HiscoresClient<T = ReqwestTransport> {
    transport: T,
    config: HiscoresConfig,
}

impl HiscoresClient<ReqwestTransport> {
    pub fn new(config: HiscoresConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self { transport, config })
    }
}

impl<T: HiscoresTransport> HiscoresClient<T> {
    pub fn with_transport(transport: T, config: HiscoresConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &HiscoresConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request a player's raw stats.
    ///
    /// Fails with `ServiceUnavailable` on timeout or when the maintenance page
    /// is served, and with `InvalidResponse` on any non-200 status.
    pub fn request_hiscores(&self, player: &str) -> Result<HiscoresResponse> {
        let url = select_endpoint(player, &self.config.endpoints);
        let timeout = self.config.timeout()?;
        debug!(player, url, "Requesting Hiscores");

        let response = match self.transport.get(url, &[("player", player)], timeout) {
            Ok(response) => response,
            Err(Error::Timeout(_)) => {
                return Err(Error::ServiceUnavailable(format!(
                    "Hiscores API timed out after {} seconds",
                    self.config.timeout_secs
                )));
            }
            Err(e) => return Err(e),
        };

        if response.elapsed > self.config.warn_after() {
            warn!(
                player,
                elapsed_secs = response.elapsed.as_secs(),
                "Longer than expected response time from Hiscores API: {}s",
                response.elapsed.as_secs()
            );
        }

        check_response(response)
    }

    /// Fetch, parse and label a player's stats.
    pub fn fetch_stats(&self, player: &str) -> Result<ParsedStats> {
        self.fetch_stats_with_clock(player, &SystemClock)
    }

    pub fn fetch_stats_with_clock<C: Clock>(&self, player: &str, clock: &C) -> Result<ParsedStats> {
        let response = self.request_hiscores(player)?;
        let stats = process_hiscores_response(&response, clock)?;
        info!(
            player = %stats.player,
            elapsed_ms = response.elapsed.as_millis() as u64,
            "Fetched Hiscores stats"
        );
        Ok(stats)
    }
}

/// Classify a completed response as data or failure.
///
/// The maintenance page check runs first: upstream has been seen serving it
/// with a 200 as well as with error statuses.
pub fn check_response(response: HiscoresResponse) -> Result<HiscoresResponse> {
    if response.body.contains(HTML_MARKER) {
        return Err(Error::ServiceUnavailable(
            "Hiscores API returned HTML response".to_string(),
        ));
    }

    if !response.is_success() {
        return Err(Error::InvalidResponse {
            status: response.status,
            reason: response.reason,
            url: response.url,
        });
    }

    Ok(response)
}
