use super::client::PaymentRecord;

/// Sum of all recorded amounts; zero for an empty history.
pub fn total_paid(records: &[PaymentRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

/// Presentation order for payment histories: most recently entered first.
///
/// This reverses insertion order only. Records are deliberately not re-sorted
/// by their date field.
pub fn display_order(records: &[PaymentRecord]) -> Vec<&PaymentRecord> {
    records.iter().rev().collect()
}
