mod common;

use common::*;
use expense_organizer::store::{LoadStatus, StoreState};

#[test]
fn starts_idle_and_empty() {
    let state = StoreState::default();
    assert_eq!(state.status, LoadStatus::Idle);
    assert!(state.cards.is_empty());
    assert!(state.transactions.is_empty());
    assert!(state.budgets.is_empty());
    assert!(state.connections.is_empty());
}

#[test]
fn apply_loaded_replaces_all_collections() {
    let mut state = StoreState::default();
    state.apply_loaded(
        vec![card("c1", "Platinum")],
        vec![transaction("t1", "2024-07-01", 10.0)],
        vec![budget("b1", "iFood", 200.0, 30.0)],
        vec![],
    );
    assert_eq!(state.status, LoadStatus::Loaded);
    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.transactions.len(), 1);

    // A later load replaces wholesale, it does not merge.
    state.apply_loaded(
        vec![],
        vec![
            transaction("t2", "2024-07-02", 20.0),
            transaction("t3", "2024-07-03", 30.0),
        ],
        vec![],
        vec![],
    );
    assert!(state.cards.is_empty());
    assert_eq!(state.transactions.len(), 2);
    assert!(state.budgets.is_empty());
}

#[test]
fn failed_load_keeps_previous_collections() {
    let mut state = StoreState::default();
    state.apply_loaded(
        vec![card("c1", "Platinum")],
        vec![transaction("t1", "2024-07-01", 10.0)],
        vec![budget("b1", "iFood", 200.0, 30.0)],
        vec![],
    );

    let before = state.clone();
    state.mark_errored();

    assert_eq!(state.status, LoadStatus::Errored);
    assert_eq!(state.cards, before.cards);
    assert_eq!(state.transactions, before.transactions);
    assert_eq!(state.budgets, before.budgets);
    assert_eq!(state.connections, before.connections);
}

#[test]
fn clear_resets_everything_to_idle() {
    let mut state = StoreState::default();
    state.apply_loaded(
        vec![card("c1", "Platinum")],
        vec![transaction("t1", "2024-07-01", 10.0)],
        vec![budget("b1", "iFood", 200.0, 30.0)],
        vec![connection(
            "conn-1",
            expense_organizer::models::ConnectionStatus::Accepted,
            "user-1",
            "user-2",
        )],
    );
    state.mark_errored();

    state.clear();

    assert_eq!(state, StoreState::default());
    assert_eq!(state.status, LoadStatus::Idle);
    assert!(state.transactions_with_details().is_empty());
    assert!(state.accepted_connections().is_empty());
    assert!(state.pending_requests_received("user-1").is_empty());
}

#[test]
fn refetched_budget_totals_are_taken_as_is() {
    // Adding a 50.00 expense against a budget makes the backend trigger
    // bump spent_amount; the client shows whatever the refetch returns
    // and does no arithmetic of its own.
    let mut state = StoreState::default();
    state.apply_loaded(
        vec![],
        vec![],
        vec![budget("b1", "Alimentação", 200.0, 30.0)],
        vec![],
    );

    state.transactions = vec![transaction_on_budget("t1", "2024-07-25", 50.0, "b1")];
    state.budgets = vec![budget("b1", "Alimentação", 200.0, 80.0)];

    assert_eq!(state.budgets[0].spent_amount, 80.0);
    let detailed = state.transactions_with_details();
    assert_eq!(
        detailed[0].budget.as_ref().unwrap().spent_amount,
        80.0
    );
}
