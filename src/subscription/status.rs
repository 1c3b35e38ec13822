use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Derived lifecycle state of a subscription relative to its expiry instant.
///
/// Never persisted; re-derived from the start date on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl SubscriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::ExpiringSoon => "Expiring Soon",
            SubscriptionStatus::Expired => "Expired",
        }
    }
}

/// Whole days from `now` until `expiry`, floored.
///
/// Floored rather than truncated so an expiry earlier today already counts
/// as one day in the past.
pub fn days_until_expiry(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expiry - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Classifies a subscription by how many whole days remain before expiry.
///
/// Negative days mean expired; zero through seven inclusive mean expiring
/// soon; anything beyond a week out is active.
pub fn classify(expiry: DateTime<Utc>, now: DateTime<Utc>) -> SubscriptionStatus {
    let days = days_until_expiry(expiry, now);
    if days < 0 {
        SubscriptionStatus::Expired
    } else if days <= 7 {
        SubscriptionStatus::ExpiringSoon
    } else {
        SubscriptionStatus::Active
    }
}
