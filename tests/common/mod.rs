#![allow(dead_code)]

use expense_organizer::models::*;

pub fn transaction(id: &str, date: &str, amount: f64) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        title: format!("title-{}", id),
        place: "somewhere".to_string(),
        amount,
        category: "Outros".to_string(),
        card_id: None,
        budget_id: None,
        kind: PaymentKind::Debit,
        user_id: "user-1".to_string(),
        author: None,
    }
}

pub fn transaction_on_card(id: &str, date: &str, amount: f64, card_id: &str) -> Transaction {
    Transaction {
        card_id: Some(card_id.to_string()),
        kind: PaymentKind::Credit,
        ..transaction(id, date, amount)
    }
}

pub fn transaction_on_budget(id: &str, date: &str, amount: f64, budget_id: &str) -> Transaction {
    Transaction {
        budget_id: Some(budget_id.to_string()),
        ..transaction(id, date, amount)
    }
}

pub fn card(id: &str, name: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        bank: "Banco Azul".to_string(),
        closing_day: 28,
        due_day: 5,
    }
}

pub fn budget(id: &str, name: &str, total: f64, spent: f64) -> Budget {
    Budget {
        id: id.to_string(),
        name: name.to_string(),
        total_amount: total,
        spent_amount: spent,
    }
}

pub fn connection(
    id: &str,
    status: ConnectionStatus,
    requester_id: &str,
    addressee_id: &str,
) -> Connection {
    Connection {
        id: id.to_string(),
        status,
        requester_id: requester_id.to_string(),
        addressee_id: addressee_id.to_string(),
        created_at: "2024-07-25T10:30:00Z".to_string(),
        requester: Some(AuthorRef {
            email: Some(format!("{}@example.com", requester_id)),
        }),
        addressee: Some(AuthorRef {
            email: Some(format!("{}@example.com", addressee_id)),
        }),
    }
}
