use chrono::{DateTime, TimeZone, Utc};
use subtrack_core::{
    report::{default_report_name, format_amount, render_client_report, status_line},
    subscription::{Category, Client, Duration, PaymentRecord, SubscriptionStatus},
};

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn sample_client() -> (Client, Category) {
    let now = utc(2024, 1, 1);
    let category = Category::new("Hosting", "#3B82F6", now);
    let mut client = Client::new(
        "Acme Corporation",
        category.id.as_str(),
        Duration::OneMonth,
        now,
        now,
    )
        .with_contact(Some("contact@acmecorp.com".into()), None);
    client
        .payments
        .push(PaymentRecord::new(49.99, utc(2024, 1, 2), Some("first".into())));
    client
        .payments
        .push(PaymentRecord::new(10.0, utc(2024, 1, 20), None));
    (client, category)
}

#[test]
fn report_contains_derived_values_only_from_inputs() {
    let (client, category) = sample_client();
    let doc = render_client_report(&client, &category, utc(2024, 1, 28));

    assert!(doc.contains("Acme Corporation"));
    assert!(doc.contains("Hosting"));
    assert!(doc.contains("One Month"));
    assert!(doc.contains("Feb 1, 2024"), "derived expiry date:\n{doc}");
    assert!(doc.contains("Expires in 4 days"), "status line:\n{doc}");
    assert!(doc.contains(&format_amount(59.99)), "total paid:\n{doc}");
    assert!(doc.contains("first"));
}

#[test]
fn report_orders_payments_most_recent_entry_first() {
    let (client, category) = sample_client();
    let doc = render_client_report(&client, &category, utc(2024, 1, 28));
    let first = doc.find(&format_amount(10.0)).expect("second entry");
    let second = doc.find(&format_amount(49.99)).expect("first entry");
    assert!(first < second, "entries must render in reverse entry order");
}

#[test]
fn empty_payment_history_renders_placeholder() {
    let now = utc(2024, 1, 1);
    let category = Category::new("Hosting", "#3B82F6", now);
    let client = Client::new("Acme", category.id.as_str(), Duration::OneWeek, now, now);
    let doc = render_client_report(&client, &category, now);
    assert!(doc.contains("No payments recorded"));
}

#[test]
fn status_lines_match_the_badge_wording() {
    assert_eq!(
        status_line(SubscriptionStatus::Expired, -1),
        "Expired 1 day ago"
    );
    assert_eq!(
        status_line(SubscriptionStatus::Expired, -3),
        "Expired 3 days ago"
    );
    assert_eq!(
        status_line(SubscriptionStatus::ExpiringSoon, 1),
        "Expires in 1 day"
    );
    assert_eq!(
        status_line(SubscriptionStatus::Active, 20),
        "Active - 20 days remaining"
    );
}

#[test]
fn report_names_are_slugged_from_the_client_name() {
    let now = utc(2024, 1, 1);
    let client = Client::new("Acme Corporation", "1", Duration::OneWeek, now, now);
    assert_eq!(default_report_name(&client), "acme_corporation_report.txt");
}
