use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{Budget, Connection, PaymentKind};

/// Where the money for a transaction comes from, as encoded by the
/// combined payment-method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentSource {
    Card,
    Budget,
}

impl PaymentSource {
    /// Card purchases post as credit, budget spends as debit.
    pub fn kind(self) -> PaymentKind {
        match self {
            PaymentSource::Card => PaymentKind::Credit,
            PaymentSource::Budget => PaymentKind::Debit,
        }
    }
}

/// Splits a selector value like `card-<id>` or `budget-<id>` into the
/// source tag and the identifier. Identifiers may themselves contain
/// hyphens, so only the first segment is the tag.
pub fn split_payment_method(value: &str) -> Option<(PaymentSource, String)> {
    let (tag, id) = value.split_once('-')?;
    if id.is_empty() {
        return None;
    }
    match tag {
        "card" => Some((PaymentSource::Card, id.to_string())),
        "budget" => Some((PaymentSource::Budget, id.to_string())),
        _ => None,
    }
}

// Accepts plain YYYY-MM-DD as well as full RFC 3339 timestamps, which
// is what connection rows carry in `created_at`.
fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let head = date_str.get(..10).unwrap_or(date_str);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

pub fn format_date_short(date_str: &str) -> String {
    parse_date(date_str)
        .map(|d| d.format("%d/%m").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

pub fn format_amount(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

pub fn today_date() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn current_year_month() -> (i32, u32) {
    let today = Utc::now().date_naive();
    (today.year(), today.month())
}

/// True when the date string falls inside the given month. Unparseable
/// dates never match.
pub fn is_in_month(date_str: &str, year: i32, month: u32) -> bool {
    parse_date(date_str)
        .map(|d| d.year() == year && d.month() == month)
        .unwrap_or(false)
}

/// Share of a budget already spent, capped at 100 for bar widths.
pub fn budget_progress_percent(budget: &Budget) -> f64 {
    if budget.total_amount <= 0.0 {
        return 0.0;
    }
    (budget.spent_amount / budget.total_amount * 100.0).min(100.0)
}

/// Email of the other party of a connection, from the point of view of
/// the given user.
pub fn counterparty_email(connection: &Connection, user_id: &str) -> String {
    let other = if connection.requester_id == user_id {
        connection.addressee.as_ref()
    } else {
        connection.requester.as_ref()
    };
    other
        .and_then(|p| p.email.clone())
        .unwrap_or_else(|| "—".to_string())
}
