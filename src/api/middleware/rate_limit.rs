//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// One request is replenished every this many milliseconds, per client IP.
pub const REPLENISH_INTERVAL_MS: u64 = 200;

/// Requests a client may make in a burst before being throttled.
pub const BURST_SIZE: u32 = 60;

/// Creates the per-IP rate limiter for every public route.
///
/// # Limits
///
/// - **Rate**: 5 requests per second
/// - **Burst**: 60 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// Returns `None` if the governor configuration is rejected.
pub fn layer()
-> Option<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(REPLENISH_INTERVAL_MS)
        .burst_size(BURST_SIZE)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_config_is_accepted() {
        assert!(layer().is_some());
    }
}
