use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
}

/// Joined display info for a row's author, present on linked accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorRef {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Credit,
    Debit,
}

/// A single expense. The form sets exactly one of `card_id`/`budget_id`;
/// the type does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub title: String,
    pub place: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub card_id: Option<String>,
    #[serde(default)]
    pub budget_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    pub user_id: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub bank: String,
    /// Day of month the statement closes (1-31).
    pub closing_day: u32,
    /// Day of month the payment is due (1-31).
    pub due_day: u32,
}

/// Spending allotment. `spent_amount` is maintained by a backend
/// trigger; the client only ever displays what a fetch returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub total_amount: f64,
    pub spent_amount: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub id: String,
    pub status: ConnectionStatus,
    pub requester_id: String,
    pub addressee_id: String,
    pub created_at: String,
    #[serde(default)]
    pub requester: Option<AuthorRef>,
    #[serde(default)]
    pub addressee: Option<AuthorRef>,
}

/// A transaction with its referenced card or budget resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionWithDetails {
    pub transaction: Transaction,
    pub card: Option<Card>,
    pub budget: Option<Budget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionPayload {
    pub title: String,
    pub place: String,
    pub amount: f64,
    pub date: String,
    pub category: String,
    pub card_id: Option<String>,
    pub budget_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardPayload {
    pub name: String,
    pub bank: String,
    pub closing_day: u32,
    pub due_day: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBudgetPayload {
    pub name: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendInvitePayload {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondConnectionPayload {
    pub status: ConnectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteResponse {
    pub message: String,
}
