//! Subscription domain models, lifecycle calculations, and the roster
//! container they operate on.

pub mod category;
pub mod client;
pub mod duration;
pub mod payments;
pub mod roster;
pub mod status;

pub use category::{Category, UNKNOWN_CATEGORY_ID};
pub use client::{Client, PaymentRecord};
pub use duration::{expiry_from, start_from_expiry, Duration};
pub use payments::{display_order, total_paid};
pub use roster::Roster;
pub use status::{classify, days_until_expiry, SubscriptionStatus};
