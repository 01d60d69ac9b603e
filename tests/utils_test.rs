mod common;

use common::*;
use expense_organizer::models::{AuthorRef, PaymentKind};
use expense_organizer::utils::*;

#[test]
fn split_payment_method_card() {
    let (source, id) = split_payment_method("card-abc123").unwrap();
    assert_eq!(source, PaymentSource::Card);
    assert_eq!(id, "abc123");
}

#[test]
fn split_payment_method_rebuilds_hyphenated_ids() {
    // Backend identifiers are UUIDs, which contain hyphens themselves.
    let value = "budget-550e8400-e29b-41d4-a716-446655440000";
    let (source, id) = split_payment_method(value).unwrap();
    assert_eq!(source, PaymentSource::Budget);
    assert_eq!(id, "550e8400-e29b-41d4-a716-446655440000");
}

#[test]
fn split_payment_method_rejects_malformed_values() {
    assert_eq!(split_payment_method(""), None);
    assert_eq!(split_payment_method("card"), None);
    assert_eq!(split_payment_method("card-"), None);
    assert_eq!(split_payment_method("wallet-123"), None);
}

#[test]
fn payment_source_maps_to_kind() {
    assert_eq!(PaymentSource::Card.kind(), PaymentKind::Credit);
    assert_eq!(PaymentSource::Budget.kind(), PaymentKind::Debit);
}

#[test]
fn is_in_month_handles_dates_and_timestamps() {
    assert!(is_in_month("2024-07-25", 2024, 7));
    assert!(is_in_month("2024-07-25T10:30:00Z", 2024, 7));
    assert!(!is_in_month("2024-08-01", 2024, 7));
    assert!(!is_in_month("garbage", 2024, 7));
}

#[test]
fn format_date_short_is_day_month() {
    assert_eq!(format_date_short("2024-07-25"), "25/07");
    assert_eq!(format_date_short("2024-07-25T10:30:00Z"), "25/07");
    // Unparseable input falls through untouched.
    assert_eq!(format_date_short("???"), "???");
}

#[test]
fn format_amount_uses_two_decimals() {
    assert_eq!(format_amount(50.0), "R$ 50.00");
    assert_eq!(format_amount(0.5), "R$ 0.50");
}

#[test]
fn budget_progress_is_capped() {
    assert_eq!(
        budget_progress_percent(&budget("b1", "iFood", 200.0, 30.0)),
        15.0
    );
    // Overspent budgets fill the bar but never overflow it.
    assert_eq!(
        budget_progress_percent(&budget("b2", "Lazer", 100.0, 250.0)),
        100.0
    );
    assert_eq!(
        budget_progress_percent(&budget("b3", "Vazio", 0.0, 10.0)),
        0.0
    );
}

#[test]
fn counterparty_email_picks_the_other_side() {
    use expense_organizer::models::ConnectionStatus;

    let conn = connection("conn-1", ConnectionStatus::Accepted, "user-a", "user-b");
    assert_eq!(counterparty_email(&conn, "user-a"), "user-b@example.com");
    assert_eq!(counterparty_email(&conn, "user-b"), "user-a@example.com");
}

#[test]
fn counterparty_email_falls_back_when_profile_is_missing() {
    use expense_organizer::models::ConnectionStatus;

    let mut conn = connection("conn-1", ConnectionStatus::Accepted, "user-a", "user-b");
    conn.addressee = None;
    assert_eq!(counterparty_email(&conn, "user-a"), "—");

    conn.requester = Some(AuthorRef { email: None });
    assert_eq!(counterparty_email(&conn, "user-b"), "—");
}

#[test]
fn today_date_is_iso_formatted() {
    let today = today_date();
    assert_eq!(today.len(), 10);
    assert_eq!(&today[4..5], "-");
    assert_eq!(&today[7..8], "-");
}
