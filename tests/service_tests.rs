use chrono::{DateTime, TimeZone, Utc};
use subtrack_core::{
    core::services::{CategoryService, ClientService, PaymentService, ServiceError},
    subscription::{Category, Client, Duration, Roster, UNKNOWN_CATEGORY_ID},
};

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn prepared_roster() -> (Roster, String, String) {
    let now = utc(2024, 1, 1);
    let mut roster = Roster::new(now);
    let category = Category::new("Hosting", "#3B82F6", now);
    let category_id = CategoryService::add(&mut roster, category).unwrap();
    let client = Client::new("Acme", category_id.clone(), Duration::OneMonth, now, now);
    let client_id = ClientService::add(&mut roster, client).unwrap();
    (roster, client_id, category_id)
}

#[test]
fn category_names_must_be_unique_case_insensitively() {
    let (mut roster, _, _) = prepared_roster();
    let duplicate = Category::new("  hosting ", "#FFFFFF", utc(2024, 1, 2));
    let err = CategoryService::add(&mut roster, duplicate).unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn unknown_category_name_is_reserved() {
    let mut roster = Roster::new(utc(2024, 1, 1));
    let reserved = Category::new("Unknown", "#000000", utc(2024, 1, 1));
    assert!(CategoryService::add(&mut roster, reserved).is_err());
}

#[test]
fn removing_a_category_never_cascades() {
    let (mut roster, client_id, category_id) = prepared_roster();
    CategoryService::remove(&mut roster, &category_id).unwrap();

    let client = roster.client(&client_id).unwrap();
    assert_eq!(client.category_id, category_id, "reference must survive");

    let resolved = roster.resolve_category(&client.category_id);
    assert_eq!(resolved.id, UNKNOWN_CATEGORY_ID);
    assert_eq!(resolved.name, "Unknown");
}

#[test]
fn empty_client_names_are_rejected() {
    let (mut roster, _, category_id) = prepared_roster();
    let nameless = Client::new(
        "   ",
        category_id,
        Duration::OneWeek,
        utc(2024, 1, 1),
        utc(2024, 1, 1),
    );
    assert!(ClientService::add(&mut roster, nameless).is_err());
}

#[test]
fn payment_amounts_are_validated_at_entry() {
    let (mut roster, client_id, _) = prepared_roster();
    let date = utc(2024, 1, 10);

    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let result = PaymentService::add(&mut roster, &client_id, bad, date, None);
        assert!(result.is_err(), "amount {bad} must be rejected");
    }
    assert!(roster.client(&client_id).unwrap().payments.is_empty());

    PaymentService::add(&mut roster, &client_id, 49.99, date, Some("first".into())).unwrap();
    assert_eq!(roster.client(&client_id).unwrap().payments.len(), 1);
}

#[test]
fn payments_append_in_entry_order() {
    let (mut roster, client_id, _) = prepared_roster();
    // Second entry carries an earlier date; entry order must win.
    PaymentService::add(&mut roster, &client_id, 10.0, utc(2024, 3, 1), None).unwrap();
    PaymentService::add(&mut roster, &client_id, 20.0, utc(2024, 1, 1), None).unwrap();

    let payments = &roster.client(&client_id).unwrap().payments;
    assert_eq!(payments[0].amount, 10.0);
    assert_eq!(payments[1].amount, 20.0);
}

#[test]
fn remove_payment_by_id() {
    let (mut roster, client_id, _) = prepared_roster();
    let payment_id =
        PaymentService::add(&mut roster, &client_id, 10.0, utc(2024, 2, 1), None).unwrap();
    PaymentService::remove(&mut roster, &client_id, &payment_id).unwrap();
    assert!(roster.client(&client_id).unwrap().payments.is_empty());

    let err = PaymentService::remove(&mut roster, &client_id, &payment_id).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn set_expiry_re_derives_the_start_date() {
    let (mut roster, client_id, _) = prepared_roster();
    ClientService::set_expiry(&mut roster, &client_id, utc(2024, 6, 15)).unwrap();

    let client = roster.client(&client_id).unwrap();
    // Start stays the source of truth; the stored start yields the edited
    // expiry when re-derived.
    assert_eq!(client.start_date, utc(2024, 5, 15));
    assert_eq!(client.expiry_date(), utc(2024, 6, 15));
}

#[test]
fn contact_details_can_be_updated() {
    let (mut roster, client_id, _) = prepared_roster();
    ClientService::update_contact(
        &mut roster,
        &client_id,
        Some("billing@acme.test".into()),
        None,
    )
    .unwrap();
    let client = roster.client(&client_id).unwrap();
    assert_eq!(client.email.as_deref(), Some("billing@acme.test"));
    assert_eq!(client.phone, None);
}

#[test]
fn missing_clients_surface_not_found() {
    let (mut roster, _, _) = prepared_roster();
    let err = ClientService::remove(&mut roster, "no-such-id").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    let err = ClientService::set_expiry(&mut roster, "no-such-id", utc(2024, 6, 1)).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
