use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::duration::{expiry_from, Duration};

/// A tracked client with its subscription term and recorded payments.
///
/// Only the start date is stored; the expiry instant is always derived from
/// it, so the two can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub category_id: String,
    pub duration: Duration,
    pub start_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        category_id: impl Into<String>,
        duration: Duration,
        start_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
            phone: None,
            category_id: category_id.into(),
            duration,
            start_date,
            created_at: now,
            payments: Vec::new(),
        }
    }

    pub fn with_contact(mut self, email: Option<String>, phone: Option<String>) -> Self {
        self.email = email;
        self.phone = phone;
        self
    }

    /// Derived expiry instant for the current start date and term.
    pub fn expiry_date(&self) -> DateTime<Utc> {
        expiry_from(self.start_date, self.duration)
    }
}

/// A single recorded payment event. Insertion order on the client is entry
/// order, not payment-date order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PaymentRecord {
    pub fn new(amount: f64, date: DateTime<Utc>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            date,
            notes,
        }
    }
}
