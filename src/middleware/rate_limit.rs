//! Per-IP limit on how many assessment sessions can be opened in a window.
use crate::error::ApiError;
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::{HashMap, VecDeque};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct RateLimiter {
    history: Arc<Mutex<HashMap<IpAddr, VecDeque<Instant>>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_secs: u64) -> Self {
        Self {
            history: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub async fn check(&self, ip: IpAddr) -> bool {
        self.check_at(ip, Instant::now()).await
    }

    async fn check_at(&self, ip: IpAddr, now: Instant) -> bool {
        let mut history = self.history.lock().await;
        let hits = history.entry(ip).or_default();

        while hits
            .front()
            .is_some_and(|first| now.duration_since(*first) >= self.window)
        {
            hits.pop_front();
        }

        if hits.len() >= self.max_requests {
            return false;
        }
        hits.push_back(now);
        true
    }

    /// Forgets addresses with no hits inside the window; returns how many remain.
    pub async fn prune(&self) -> usize {
        self.prune_at(Instant::now()).await
    }

    async fn prune_at(&self, now: Instant) -> usize {
        let mut history = self.history.lock().await;
        history.retain(|_, hits| {
            hits.retain(|hit| now.duration_since(*hit) < self.window);
            !hits.is_empty()
        });
        history.len()
    }
}

pub async fn limit_session_creation(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(limiter): State<RateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.check(addr.ip()).await {
        tracing::warn!("Session creation rate limit exceeded for {}", addr.ip());
        return ApiError::RateLimited.into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([10, 0, 0, last])
    }

    #[tokio::test]
    async fn test_blocks_after_limit() {
        let limiter = RateLimiter::new(2, 60);
        let now = Instant::now();

        assert!(limiter.check_at(ip(1), now).await);
        assert!(limiter.check_at(ip(1), now).await);
        assert!(!limiter.check_at(ip(1), now).await);

        assert!(limiter.check_at(ip(2), now).await);
    }

    #[tokio::test]
    async fn test_window_slides() {
        let limiter = RateLimiter::new(1, 60);
        let start = Instant::now();

        assert!(limiter.check_at(ip(1), start).await);
        assert!(!limiter.check_at(ip(1), start + Duration::from_secs(59)).await);
        assert!(limiter.check_at(ip(1), start + Duration::from_secs(60)).await);
    }

    #[tokio::test]
    async fn test_prune_drops_idle_addresses() {
        let limiter = RateLimiter::new(5, 10);
        let start = Instant::now();
        limiter.check_at(ip(1), start).await;
        limiter.check_at(ip(2), start + Duration::from_secs(8)).await;

        assert_eq!(limiter.prune_at(start + Duration::from_secs(12)).await, 1);
        assert_eq!(limiter.prune_at(start + Duration::from_secs(30)).await, 0);
    }
}
