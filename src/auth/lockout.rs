//! Sign-in throttling after repeated failures

use std::time::Duration;

/// Lockout policy: a single failure threshold and cooldown.
///
/// Reaching the threshold suspends submissions until the cooldown
/// elapses; expiry resets the failure counter.
#[derive(Clone, Copy, Debug)]
pub struct LockoutPolicy {
    /// Failures allowed before the lockout engages.
    pub max_attempts: u32,
    /// How long the lockout lasts once engaged.
    pub cooldown: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            cooldown: Duration::from_secs(300),
        }
    }
}

impl LockoutPolicy {
    /// Create a custom policy (tests use short cooldowns).
    pub fn custom(max_attempts: u32, cooldown: Duration) -> Self {
        Self {
            max_attempts,
            cooldown,
        }
    }

    /// Attempts left before the lockout engages.
    pub fn attempts_remaining(&self, failed_attempts: u32) -> u32 {
        self.max_attempts.saturating_sub(failed_attempts)
    }

    /// Whether a failure count triggers the lockout.
    pub fn reaches_threshold(&self, failed_attempts: u32) -> bool {
        failed_attempts >= self.max_attempts
    }

    /// Human-readable cooldown length.
    pub fn describe_cooldown(&self) -> String {
        let secs = self.cooldown.as_secs();
        if secs < 60 {
            format!("{secs} seconds")
        } else if secs % 60 == 0 {
            format!("{} minutes", secs / 60)
        } else {
            format!("{}:{:02} minutes", secs / 60, secs % 60)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_product() {
        let policy = LockoutPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.cooldown, Duration::from_secs(300));
        assert_eq!(policy.describe_cooldown(), "5 minutes");
    }

    #[test]
    fn remaining_attempts_saturate() {
        let policy = LockoutPolicy::default();
        assert_eq!(policy.attempts_remaining(0), 5);
        assert_eq!(policy.attempts_remaining(4), 1);
        assert_eq!(policy.attempts_remaining(7), 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let policy = LockoutPolicy::default();
        assert!(!policy.reaches_threshold(4));
        assert!(policy.reaches_threshold(5));
    }
}
