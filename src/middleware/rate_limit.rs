//! Rate limiting middleware
//!
//! Throttles login attempts per account email to slow down password
//! guessing. Backed by a keyed `governor` limiter.

use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use tracing::{debug, warn};

use crate::utils::errors::{Result, TurnoutError};

/// Tracked keys above which idle entries are pruned
const PRUNE_THRESHOLD: usize = 10_000;

/// Per-key attempt limiter for login
#[derive(Clone)]
pub struct LoginRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<String>>,
}

impl LoginRateLimiter {
    /// Allow `attempts_per_minute` attempts per key, replenished evenly over a minute
    pub fn new(attempts_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(attempts_per_minute).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute))),
        }
    }

    /// Record an attempt for `key`, failing once the quota is spent
    pub fn check(&self, key: &str) -> Result<()> {
        if self.limiter.len() > PRUNE_THRESHOLD {
            self.limiter.retain_recent();
            debug!(remaining = self.limiter.len(), "Pruned idle rate limit entries");
        }

        self.limiter.check_key(&key.to_string()).map_err(|_| {
            warn!(key = key, "Login rate limit exceeded");
            TurnoutError::RateLimitExceeded
        })
    }
}
