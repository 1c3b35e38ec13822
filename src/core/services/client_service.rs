use chrono::{DateTime, Utc};

use crate::subscription::{start_from_expiry, Client, Roster};

use super::{ServiceError, ServiceResult};

pub struct ClientService;

impl ClientService {
    pub fn add(roster: &mut Roster, client: Client) -> ServiceResult<String> {
        if client.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Client name cannot be empty".into()));
        }
        Ok(roster.add_client(client))
    }

    pub fn update_contact(
        roster: &mut Roster,
        id: &str,
        email: Option<String>,
        phone: Option<String>,
    ) -> ServiceResult<()> {
        let client = roster
            .client_mut(id)
            .ok_or_else(|| ServiceError::NotFound("Client".into()))?;
        client.email = email;
        client.phone = phone;
        roster.touch();
        Ok(())
    }

    /// Applies a user-edited expiry date by re-deriving the start date.
    ///
    /// The start date stays the single source of truth; the expiry itself is
    /// never stored.
    pub fn set_expiry(roster: &mut Roster, id: &str, expiry: DateTime<Utc>) -> ServiceResult<()> {
        let client = roster
            .client_mut(id)
            .ok_or_else(|| ServiceError::NotFound("Client".into()))?;
        client.start_date = start_from_expiry(expiry, client.duration);
        roster.touch();
        Ok(())
    }

    pub fn remove(roster: &mut Roster, id: &str) -> ServiceResult<()> {
        if roster.remove_client(id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Client".into()))
        }
    }
}
