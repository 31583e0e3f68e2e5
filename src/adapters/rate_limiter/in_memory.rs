//! In-memory rate limiter implementation.
//!
//! Uses a fixed-window counter algorithm with an in-memory HashMap.
//! Counters are per process; several instances behind a balancer each
//! enforce their own window. Expired windows are swept at most once per
//! window length, so the map only holds keys seen in the last two windows.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::RateLimitConfig;
use crate::domain::foundation::Timestamp;
use crate::ports::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter,
};

/// In-memory fixed-window rate limiter.
///
/// Every key gets the same quota; a key's window starts with its first
/// request and resets once `window_secs` have elapsed.
#[derive(Debug, Clone)]
pub struct InMemoryRateLimiter {
    limit: u32,
    window_secs: u32,
    windows: Arc<RwLock<Windows>>,
}

#[derive(Debug, Default)]
struct Windows {
    entries: HashMap<RateLimitKey, WindowState>,
    /// When expired entries were last removed (unix seconds).
    last_sweep: u64,
}

/// State for a single rate limit window.
#[derive(Debug, Clone)]
struct WindowState {
    /// Number of requests in the current window.
    count: u32,
    /// When the current window started (unix seconds).
    window_start: u64,
}

impl InMemoryRateLimiter {
    pub fn new(limit: u32, window_secs: u32) -> Self {
        Self {
            limit,
            window_secs,
            windows: Arc::new(RwLock::new(Windows::default())),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.requests_per_window, config.window_secs)
    }

    fn now_secs() -> u64 {
        Timestamp::now().as_unix_secs()
    }

    fn window_end(&self, window_start: u64) -> u64 {
        window_start + self.window_secs as u64
    }

    async fn check_at(&self, key: RateLimitKey, now: u64) -> RateLimitResult {
        let mut windows = self.windows.write().await;

        if now >= windows.last_sweep + self.window_secs as u64 {
            windows
                .entries
                .retain(|_, state| now < self.window_end(state.window_start));
            windows.last_sweep = now;
        }

        let state = windows.entries.entry(key.clone()).or_insert(WindowState {
            count: 0,
            window_start: now,
        });

        if now >= self.window_end(state.window_start) {
            state.count = 0;
            state.window_start = now;
        }

        let reset_secs = self.window_end(state.window_start);

        if state.count >= self.limit {
            let retry_after = (reset_secs.saturating_sub(now) as u32).max(1);
            return RateLimitResult::Denied(RateLimitDenied {
                limit: self.limit,
                retry_after_secs: retry_after,
                reset_at: Timestamp::from_unix_secs(reset_secs),
                scope: key.scope,
                message: format!(
                    "Too many requests. Retry after {} seconds.",
                    retry_after
                ),
            });
        }

        state.count += 1;

        RateLimitResult::Allowed(RateLimitStatus {
            limit: self.limit,
            remaining: self.limit.saturating_sub(state.count),
            reset_at: Timestamp::from_unix_secs(reset_secs),
            window_secs: self.window_secs,
        })
    }

    async fn status_at(&self, key: &RateLimitKey, now: u64) -> RateLimitStatus {
        let windows = self.windows.read().await;

        let (count, window_start) = windows
            .entries
            .get(key)
            .filter(|state| now < self.window_end(state.window_start))
            .map(|state| (state.count, state.window_start))
            .unwrap_or((0, now));

        RateLimitStatus {
            limit: self.limit,
            remaining: self.limit.saturating_sub(count),
            reset_at: Timestamp::from_unix_secs(self.window_end(window_start)),
            window_secs: self.window_secs,
        }
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError> {
        Ok(self.check_at(key, Self::now_secs()).await)
    }

    async fn status(&self, key: RateLimitKey) -> Result<RateLimitStatus, RateLimitError> {
        Ok(self.status_at(&key, Self::now_secs()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── Basic Functionality Tests ───────────────────────────────────

    #[tokio::test]
    async fn allows_requests_within_limit() {
        let limiter = InMemoryRateLimiter::from_config(&RateLimitConfig::default());
        let key = RateLimitKey::ip("192.168.1.1");

        for i in 0..10 {
            let result = limiter.check(key.clone()).await.unwrap();
            assert!(result.is_allowed(), "Request {} should be allowed", i + 1);
        }
    }

    #[tokio::test]
    async fn denies_requests_at_limit() {
        let limiter = InMemoryRateLimiter::new(5, 60);
        let key = RateLimitKey::ip("192.168.1.1");

        for _ in 0..5 {
            assert!(limiter.check(key.clone()).await.unwrap().is_allowed());
        }

        match limiter.check(key.clone()).await.unwrap() {
            RateLimitResult::Denied(denied) => {
                assert_eq!(denied.limit, 5);
                assert!(denied.retry_after_secs > 0);
                assert!(denied.retry_after_secs <= 60);
            }
            RateLimitResult::Allowed(_) => panic!("sixth request should be denied"),
        }
    }

    #[tokio::test]
    async fn status_returns_remaining_without_consuming() {
        let limiter = InMemoryRateLimiter::new(10, 60);
        let key = RateLimitKey::ip("10.0.0.1");

        let status = limiter.status(key.clone()).await.unwrap();
        assert_eq!(status.limit, 10);
        assert_eq!(status.remaining, 10);

        for _ in 0..3 {
            limiter.check(key.clone()).await.unwrap();
        }

        let status = limiter.status(key.clone()).await.unwrap();
        assert_eq!(status.remaining, 7);
        let status = limiter.status(key).await.unwrap();
        assert_eq!(status.remaining, 7);
    }

    #[tokio::test]
    async fn window_resets_after_expiry() {
        let limiter = InMemoryRateLimiter::new(2, 60);
        let key = RateLimitKey::ip("10.0.0.2");

        limiter.check_at(key.clone(), 1_000).await;
        limiter.check_at(key.clone(), 1_001).await;
        assert!(!limiter.check_at(key.clone(), 1_059).await.is_allowed());

        let result = limiter.check_at(key.clone(), 1_060).await;
        match result {
            RateLimitResult::Allowed(status) => {
                assert_eq!(status.remaining, 1);
                assert_eq!(status.reset_at.as_unix_secs(), 1_120);
            }
            RateLimitResult::Denied(_) => panic!("new window should allow"),
        }
    }

    #[tokio::test]
    async fn retry_after_counts_down_to_window_end() {
        let limiter = InMemoryRateLimiter::new(1, 900);
        let key = RateLimitKey::global();

        limiter.check_at(key.clone(), 0).await;
        match limiter.check_at(key, 600).await {
            RateLimitResult::Denied(denied) => assert_eq!(denied.retry_after_secs, 300),
            RateLimitResult::Allowed(_) => panic!("expected denial"),
        }
    }

    #[tokio::test]
    async fn expired_windows_are_swept() {
        let limiter = InMemoryRateLimiter::new(10, 60);

        for i in 0..5000 {
            let ip = format!("10.1.{}.{}", i / 256, i % 256);
            limiter.check_at(RateLimitKey::ip(&ip), 0).await;
        }
        assert_eq!(limiter.windows.read().await.entries.len(), 5000);

        limiter.check_at(RateLimitKey::ip("10.9.9.9"), 1_000_000).await;

        assert_eq!(limiter.windows.read().await.entries.len(), 1);
    }

    #[tokio::test]
    async fn live_windows_survive_a_sweep() {
        let limiter = InMemoryRateLimiter::new(3, 60);
        let key = RateLimitKey::ip("10.0.0.3");

        limiter.check_at(RateLimitKey::ip("10.0.0.4"), 10).await;
        limiter.check_at(key.clone(), 50).await;
        // Sweeps: 10.0.0.4 expired at 70, 10.0.0.3 lives until 110.
        limiter.check_at(RateLimitKey::ip("10.0.0.5"), 75).await;

        let status = limiter.status_at(&key, 75).await;
        assert_eq!(status.remaining, 2);
        assert_eq!(limiter.windows.read().await.entries.len(), 2);
    }

    // ─── Different Keys Are Independent ───────────────────────────────

    #[tokio::test]
    async fn different_ips_have_independent_limits() {
        let limiter = InMemoryRateLimiter::new(3, 60);
        let key1 = RateLimitKey::ip("1.1.1.1");
        let key2 = RateLimitKey::ip("2.2.2.2");

        for _ in 0..3 {
            limiter.check(key1.clone()).await.unwrap();
        }
        assert!(!limiter.check(key1).await.unwrap().is_allowed());
        assert!(limiter.check(key2).await.unwrap().is_allowed());
    }

    #[tokio::test]
    async fn remaining_decrements_correctly() {
        let limiter = InMemoryRateLimiter::new(10, 60);
        let key = RateLimitKey::ip("test-ip");

        for expected_remaining in (0..10).rev() {
            if let RateLimitResult::Allowed(status) = limiter.check(key.clone()).await.unwrap() {
                assert_eq!(status.remaining, expected_remaining as u32);
            }
        }
    }
}
