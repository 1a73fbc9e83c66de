//! Fixed-window request limiting keyed by client IP.

use std::net::IpAddr;
use std::net::SocketAddr;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use axum::extract::ConnectInfo;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use moka::future::Cache;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const MAX_TRACKED_CLIENTS: u64 = 100_000;

const RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
const RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RATELIMIT_RESET: HeaderName = HeaderName::from_static("ratelimit-reset");

#[derive(Debug)]
struct Window {
    started: Instant,
    hits: AtomicU32,
}

impl Window {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            hits: AtomicU32::new(0),
        }
    }
}

/// Outcome of counting one request against a client's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_after: Duration,
}

/// Allows `max_requests` per client IP in each window. A client's window
/// opens with its first request.
#[derive(Clone)]
pub struct RateLimiter {
    windows: Cache<IpAddr, Arc<Window>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        let windows = Cache::builder()
            .max_capacity(MAX_TRACKED_CLIENTS)
            .time_to_live(window)
            .build();

        Self {
            windows,
            max_requests,
            window,
        }
    }

    /// Count a request from `ip` and report whether it fits the budget.
    pub async fn check(&self, ip: IpAddr) -> RateLimitDecision {
        let mut window = self.windows.get_with(ip, async { Arc::new(Window::new()) }).await;
        if window.started.elapsed() >= self.window {
            self.windows.invalidate(&ip).await;
            window = self.windows.get_with(ip, async { Arc::new(Window::new()) }).await;
        }

        let hits = window.hits.fetch_add(1, Ordering::Relaxed).saturating_add(1);

        RateLimitDecision {
            allowed: hits <= self.max_requests,
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(hits),
            reset_after: self.window.saturating_sub(window.started.elapsed()),
        }
    }
}

/// Middleware that rejects clients over their budget with 429 and reports
/// the budget in `RateLimit-*` headers.
///
/// Requests without a peer address (no connect info) pass through.
pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>().copied()
    else {
        return next.run(req).await;
    };

    let decision = state.rate_limiter.check(addr.ip()).await;
    let reset_seconds = decision.reset_after.as_secs_f64().ceil() as u64;

    let mut response = if decision.allowed {
        next.run(req).await
    } else {
        tracing::warn!(client_ip = %addr.ip(), "Rate limit exceeded");
        ApiError::TooManyRequests(
            "Too many requests from this IP, please try again later".to_string(),
        )
        .into_response()
    };

    let headers = response.headers_mut();
    headers.insert(RATELIMIT_LIMIT, HeaderValue::from(decision.limit));
    headers.insert(RATELIMIT_REMAINING, HeaderValue::from(decision.remaining));
    headers.insert(RATELIMIT_RESET, HeaderValue::from(reset_seconds));
    if !decision.allowed {
        headers.insert(header::RETRY_AFTER, HeaderValue::from(reset_seconds));
    }

    response
}
