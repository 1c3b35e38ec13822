//! Plain-text client report export.
//!
//! Consumes only derived values (status, expiry, ordered payments, totals)
//! and renders them into a human-readable document.

use chrono::{DateTime, Utc};
use std::{fs, path::Path};

use crate::{
    errors::StoreError,
    subscription::{
        classify, days_until_expiry, display_order, total_paid, Category, Client,
        SubscriptionStatus,
    },
};

pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%b %-d, %Y").to_string()
}

pub fn format_amount(amount: f64) -> String {
    format!("\u{a3}{amount:.2}")
}

/// Human-readable status line including the day count, matching the detail
/// view wording.
pub fn status_line(status: SubscriptionStatus, days: i64) -> String {
    match status {
        SubscriptionStatus::Expired => {
            let ago = days.abs();
            format!("Expired {ago} day{} ago", plural(ago))
        }
        SubscriptionStatus::ExpiringSoon => {
            format!("Expires in {days} day{}", plural(days))
        }
        SubscriptionStatus::Active => format!("Active - {days} days remaining"),
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Renders the full report document for one client.
pub fn render_client_report(client: &Client, category: &Category, now: DateTime<Utc>) -> String {
    let expiry = client.expiry_date();
    let status = classify(expiry, now);
    let days = days_until_expiry(expiry, now);

    let mut doc = String::new();
    doc.push_str("==============================\n");
    doc.push_str("       CLIENT REPORT\n");
    doc.push_str("==============================\n\n");
    push_field(&mut doc, "Client", &client.name);
    push_field(&mut doc, "Category", &category.name);
    if let Some(email) = &client.email {
        push_field(&mut doc, "Email", email);
    }
    if let Some(phone) = &client.phone {
        push_field(&mut doc, "Phone", phone);
    }
    push_field(&mut doc, "Duration", client.duration.label());
    push_field(&mut doc, "Start Date", &format_date(client.start_date));
    push_field(&mut doc, "Expiry Date", &format_date(expiry));
    push_field(&mut doc, "Status", &status_line(status, days));
    doc.push('\n');

    doc.push_str("Payment History\n");
    doc.push_str("---------------\n");
    let ordered = display_order(&client.payments);
    if ordered.is_empty() {
        doc.push_str("No payments recorded\n");
    } else {
        doc.push_str(&format!(
            "{:<14} {:>12}  {}\n",
            "Date", "Amount", "Notes"
        ));
        for payment in &ordered {
            doc.push_str(&format!(
                "{:<14} {:>12}  {}\n",
                format_date(payment.date),
                format_amount(payment.amount),
                payment.notes.as_deref().unwrap_or("-"),
            ));
        }
    }
    doc.push('\n');
    push_field(
        &mut doc,
        "Total Paid",
        &format_amount(total_paid(&client.payments)),
    );
    doc.push('\n');
    doc.push_str(&format!("Generated {}\n", format_date(now)));
    doc
}

/// Writes the rendered report to disk.
pub fn write_client_report(
    client: &Client,
    category: &Category,
    now: DateTime<Utc>,
    path: &Path,
) -> Result<(), StoreError> {
    let doc = render_client_report(client, category, now);
    fs::write(path, doc)?;
    Ok(())
}

/// Default file name for a client's exported report.
pub fn default_report_name(client: &Client) -> String {
    let slug: String = client
        .name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_report.txt", slug.trim_matches('_'))
}

fn push_field(doc: &mut String, label: &str, value: &str) {
    doc.push_str(&format!("{label:<12} {value}\n"));
}
