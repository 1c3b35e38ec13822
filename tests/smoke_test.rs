use chrono::{TimeZone, Utc};
use subtrack_core::{
    init,
    subscription::{classify, Roster, SubscriptionStatus, UNKNOWN_CATEGORY_ID},
};

#[test]
fn default_dataset_smoke() {
    init();

    let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
    let roster = Roster::default_dataset(now);
    assert_eq!(roster.categories.len(), 3);
    assert_eq!(roster.clients.len(), 6);

    // Every seeded client classifies without touching a missing-category path.
    for client in &roster.clients {
        let resolved = roster.resolve_category(&client.category_id);
        assert_ne!(resolved.id, UNKNOWN_CATEGORY_ID, "seed refs must resolve");
        let _ = classify(client.expiry_date(), now);
    }

    // A weekly term started ten days ago is already past expiry.
    let weekly = roster
        .clients
        .iter()
        .find(|client| client.name == "Digital Dynamics")
        .unwrap();
    assert_eq!(
        classify(weekly.expiry_date(), now),
        SubscriptionStatus::Expired
    );

    // A monthly term started 25 days ago has 3-6 days left whatever the
    // month length.
    let monthly = roster
        .clients
        .iter()
        .find(|client| client.name == "TechStart Inc")
        .unwrap();
    assert_eq!(
        classify(monthly.expiry_date(), now),
        SubscriptionStatus::ExpiringSoon
    );
}
