use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::debug;

/// Sliding-window limiter keyed by client identifier.
///
/// Each bucket holds the instants of the requests admitted within the last
/// `window`. The DashMap entry guard is held for the whole check, so pruning,
/// counting and appending happen atomically per client.
pub struct RateLimiter {
    buckets: DashMap<String, VecDeque<Instant>>,
    quota: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(quota: usize, window: Duration) -> Self {
        Self {
            buckets: DashMap::new(),
            quota,
            window,
        }
    }

    pub fn check(&self, client: &str) -> bool {
        self.check_at(client, Instant::now())
    }

    pub fn check_at(&self, client: &str, now: Instant) -> bool {
        let mut bucket = self.buckets.entry(client.to_string()).or_default();

        // drop everything strictly older than the window
        while let Some(&front) = bucket.front() {
            if now.saturating_duration_since(front) > self.window {
                bucket.pop_front();
            } else {
                break;
            }
        }

        if bucket.len() >= self.quota {
            return false;
        }

        bucket.push_back(now);
        true
    }

    /// Removes buckets with no request inside the window, returns how many went.
    pub fn sweep(&self, now: Instant) -> usize {
        let before = self.buckets.len();
        self.buckets.retain(|_, bucket| {
            bucket
                .back()
                .is_some_and(|&last| now.saturating_duration_since(last) <= self.window)
        });
        before.saturating_sub(self.buckets.len())
    }

    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }
}

const MIN_SWEEP_PERIOD: Duration = Duration::from_secs(1);

// Idle bucket cleanup - runs once per window, never more than once a second
pub async fn bucket_sweeper(limiter: Arc<RateLimiter>, every: Duration) {
    let mut interval = interval(every.max(MIN_SWEEP_PERIOD));

    loop {
        interval.tick().await;

        let removed = limiter.sweep(Instant::now());
        if removed > 0 {
            debug!(removed, remaining = limiter.tracked_clients(), "swept idle rate buckets");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(300);

    #[test]
    fn rejects_request_over_quota() {
        let limiter = RateLimiter::new(3, WINDOW);
        let t0 = Instant::now();
        assert!(limiter.check_at("10.0.0.1", t0));
        assert!(limiter.check_at("10.0.0.1", t0 + Duration::from_secs(1)));
        assert!(limiter.check_at("10.0.0.1", t0 + Duration::from_secs(2)));
        assert!(!limiter.check_at("10.0.0.1", t0 + Duration::from_secs(3)));
    }

    #[test]
    fn rejections_are_not_recorded() {
        let limiter = RateLimiter::new(1, WINDOW);
        let t0 = Instant::now();
        assert!(limiter.check_at("a", t0));
        for s in 1..10 {
            assert!(!limiter.check_at("a", t0 + Duration::from_secs(s)));
        }
        // only the admitted request counts, so it frees up once it ages out
        assert!(limiter.check_at("a", t0 + WINDOW + Duration::from_millis(1)));
    }

    #[test]
    fn allows_again_after_window_elapses() {
        let limiter = RateLimiter::new(2, WINDOW);
        let t0 = Instant::now();
        assert!(limiter.check_at("a", t0));
        assert!(limiter.check_at("a", t0));
        assert!(!limiter.check_at("a", t0 + WINDOW));
        assert!(limiter.check_at("a", t0 + WINDOW + Duration::from_millis(1)));
    }

    #[test]
    fn window_slides_per_request() {
        let limiter = RateLimiter::new(2, Duration::from_secs(10));
        let t0 = Instant::now();
        assert!(limiter.check_at("a", t0));
        assert!(limiter.check_at("a", t0 + Duration::from_secs(6)));
        assert!(!limiter.check_at("a", t0 + Duration::from_secs(9)));
        // first request ages out, second one still holds a slot
        assert!(limiter.check_at("a", t0 + Duration::from_secs(11)));
        assert!(!limiter.check_at("a", t0 + Duration::from_secs(12)));
    }

    #[test]
    fn clients_are_independent() {
        let limiter = RateLimiter::new(1, WINDOW);
        let t0 = Instant::now();
        assert!(limiter.check_at("a", t0));
        assert!(!limiter.check_at("a", t0));
        assert!(limiter.check_at("b", t0));
    }

    #[test]
    fn zero_quota_rejects_everything() {
        let limiter = RateLimiter::new(0, WINDOW);
        assert!(!limiter.check("a"));
    }

    #[test]
    fn sweep_drops_only_idle_buckets() {
        let limiter = RateLimiter::new(5, Duration::from_secs(10));
        let t0 = Instant::now();
        limiter.check_at("old", t0);
        limiter.check_at("fresh", t0 + Duration::from_secs(8));
        assert_eq!(limiter.tracked_clients(), 2);

        let removed = limiter.sweep(t0 + Duration::from_secs(15));
        assert_eq!(removed, 1);
        assert_eq!(limiter.tracked_clients(), 1);
        assert!(limiter.check_at("fresh", t0 + Duration::from_secs(15)));
    }

    #[tokio::test]
    async fn sweeper_survives_zero_window() {
        let limiter = Arc::new(RateLimiter::new(5, Duration::ZERO));
        let handle = tokio::spawn(bucket_sweeper(limiter, Duration::ZERO));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished());

        handle.abort();
    }
}
