use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    category::Category,
    client::{Client, PaymentRecord},
    duration::Duration,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The full persisted dataset: every tracked client plus the category list.
///
/// Owned by a single controller and passed by reference into the pure
/// lifecycle functions; nothing here is derived state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Roster::schema_version_default")]
    pub schema_version: u8,
}

impl Roster {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            clients: Vec::new(),
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Seed dataset used when no roster has been persisted yet.
    pub fn default_dataset(now: DateTime<Utc>) -> Self {
        let mut roster = Self::new(now);
        roster.categories = default_categories(now);
        roster.clients = default_clients(now);
        roster
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn client_mut(&mut self, id: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Resolves a client's category reference, falling back to the neutral
    /// unknown category for dangling ids. Resolution never fails.
    pub fn resolve_category(&self, id: &str) -> Category {
        self.category(id)
            .cloned()
            .unwrap_or_else(|| Category::unknown(self.updated_at))
    }

    pub fn add_client(&mut self, client: Client) -> String {
        let id = client.id.clone();
        self.clients.push(client);
        self.touch();
        id
    }

    pub fn remove_client(&mut self, id: &str) -> bool {
        let before = self.clients.len();
        self.clients.retain(|client| client.id != id);
        let removed = self.clients.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn add_category(&mut self, category: Category) -> String {
        let id = category.id.clone();
        self.categories.push(category);
        self.touch();
        id
    }

    /// Removes a category without cascading: clients keep their reference
    /// and resolve to the unknown fallback from then on.
    pub fn remove_category(&mut self, id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        let removed = self.categories.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Appends a payment to the client's history, preserving entry order.
    pub fn add_payment(&mut self, client_id: &str, record: PaymentRecord) -> bool {
        let added = match self.client_mut(client_id) {
            Some(client) => {
                client.payments.push(record);
                true
            }
            None => false,
        };
        if added {
            self.touch();
        }
        added
    }

    pub fn remove_payment(&mut self, client_id: &str, payment_id: &str) -> bool {
        let removed = match self.client_mut(client_id) {
            Some(client) => {
                let before = client.payments.len();
                client.payments.retain(|payment| payment.id != payment_id);
                client.payments.len() != before
            }
            None => false,
        };
        if removed {
            self.touch();
        }
        removed
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

fn default_categories(now: DateTime<Utc>) -> Vec<Category> {
    vec![
        seeded_category("1", "Website Hosting", "#3B82F6", now),
        seeded_category("2", "App Advertising", "#10B981", now),
        seeded_category("3", "Social Media Management", "#8B5CF6", now),
    ]
}

fn default_clients(now: DateTime<Utc>) -> Vec<Client> {
    vec![
        seeded_client(
            "1001",
            "Acme Corporation",
            "contact@acmecorp.com",
            "+1 555 0100",
            "1",
            Duration::OneYear,
            30,
            now,
            299.99,
            Some("Annual subscription payment"),
        ),
        seeded_client(
            "1002",
            "TechStart Inc",
            "hello@techstart.io",
            "+1 555 0200",
            "2",
            Duration::OneMonth,
            25,
            now,
            49.99,
            Some("Monthly advertising fee"),
        ),
        seeded_client(
            "1003",
            "Green Earth Co",
            "info@greenearth.org",
            "+1 555 0300",
            "3",
            Duration::OneMonth,
            28,
            now,
            199.00,
            Some("Social media management"),
        ),
        seeded_client(
            "1004",
            "FitLife Studios",
            "contact@fitlife.com",
            "+1 555 0400",
            "1",
            Duration::OneMonth,
            5,
            now,
            79.99,
            None,
        ),
        seeded_client(
            "1005",
            "Digital Dynamics",
            "support@digitaldynamics.net",
            "+1 555 0500",
            "2",
            Duration::OneWeek,
            10,
            now,
            25.00,
            Some("Weekly campaign"),
        ),
        seeded_client(
            "1006",
            "Sunny Cafe",
            "manager@sunnycafe.com",
            "+1 555 0600",
            "3",
            Duration::OneMonth,
            26,
            now,
            149.99,
            Some("Social media content creation"),
        ),
    ]
}

fn seeded_category(id: &str, name: &str, color: &str, now: DateTime<Utc>) -> Category {
    let mut category = Category::new(name, color, now);
    category.id = id.into();
    category
}

#[allow(clippy::too_many_arguments)]
fn seeded_client(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    category_id: &str,
    duration: Duration,
    days_ago: i64,
    now: DateTime<Utc>,
    paid: f64,
    note: Option<&str>,
) -> Client {
    let start = now - chrono::Duration::days(days_ago);
    let mut client = Client::new(name, category_id, duration, start, start)
        .with_contact(Some(email.into()), Some(phone.into()));
    client.id = id.into();
    let mut payment = PaymentRecord::new(paid, start, note.map(Into::into));
    payment.id = format!("pay{id}");
    client.payments.push(payment);
    client
}
