use chrono::{DateTime, Utc};

use crate::subscription::{PaymentRecord, Roster};

use super::{ServiceError, ServiceResult};

pub struct PaymentService;

impl PaymentService {
    /// Records a payment after validating the amount at the entry boundary.
    ///
    /// Amounts must be strictly positive and finite. Records already in the
    /// store are trusted as-is and never re-validated.
    pub fn add(
        roster: &mut Roster,
        client_id: &str,
        amount: f64,
        date: DateTime<Utc>,
        notes: Option<String>,
    ) -> ServiceResult<String> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Payment amount must be a positive number".into(),
            ));
        }
        let record = PaymentRecord::new(amount, date, notes);
        let id = record.id.clone();
        if roster.add_payment(client_id, record) {
            Ok(id)
        } else {
            Err(ServiceError::NotFound("Client".into()))
        }
    }

    pub fn remove(roster: &mut Roster, client_id: &str, payment_id: &str) -> ServiceResult<()> {
        if roster.remove_payment(client_id, payment_id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Payment".into()))
        }
    }
}
