//! Domain state store: the four remote collections and the denormalized
//! views derived from them.
//!
//! Every mutation delegates to the gateway and then refetches the
//! affected collection(s) instead of patching locally, so server-side
//! effects (the budget spent-amount trigger, row-level filtering of
//! joined rows) are always reflected.

use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use futures::try_join;

use crate::api;
use crate::models::{
    Budget, Card, Connection, ConnectionStatus, CreateBudgetPayload, CreateCardPayload,
    CreateTransactionPayload, Transaction, TransactionWithDetails,
};
use crate::utils::is_in_month;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// In-memory snapshot of the remote collections.
///
/// Plain data with discrete transition methods; derived views are
/// recomputed from the current collections on every read.
/// [`ExpenseStore`] wraps this in a signal for the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    pub status: LoadStatus,
    pub cards: Vec<Card>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub connections: Vec<Connection>,
}

impl StoreState {
    /// Replaces all four collections from a completed load.
    pub fn apply_loaded(
        &mut self,
        cards: Vec<Card>,
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        connections: Vec<Connection>,
    ) {
        self.cards = cards;
        self.transactions = transactions;
        self.budgets = budgets;
        self.connections = connections;
        self.status = LoadStatus::Loaded;
    }

    /// Marks a failed load. Previously loaded collections stay as they
    /// were; only the status changes.
    pub fn mark_errored(&mut self) {
        self.status = LoadStatus::Errored;
    }

    pub fn clear(&mut self) {
        *self = StoreState::default();
    }

    /// Each transaction joined to the card it references, or to the
    /// budget when no card reference is set. Sorted by date descending;
    /// equal dates keep their input order.
    pub fn transactions_with_details(&self) -> Vec<TransactionWithDetails> {
        let mut detailed: Vec<TransactionWithDetails> = self
            .transactions
            .iter()
            .map(|t| {
                let card = t
                    .card_id
                    .as_deref()
                    .and_then(|id| self.cards.iter().find(|c| c.id == id))
                    .cloned();
                let budget = if t.card_id.is_some() {
                    None
                } else {
                    t.budget_id
                        .as_deref()
                        .and_then(|id| self.budgets.iter().find(|b| b.id == id))
                        .cloned()
                };
                TransactionWithDetails {
                    transaction: t.clone(),
                    card,
                    budget,
                }
            })
            .collect();
        detailed.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));
        detailed
    }

    pub fn accepted_connections(&self) -> Vec<Connection> {
        self.connections
            .iter()
            .filter(|c| c.status == ConnectionStatus::Accepted)
            .cloned()
            .collect()
    }

    /// Pending requests where the given user is the addressee.
    pub fn pending_requests_received(&self, user_id: &str) -> Vec<Connection> {
        self.connections
            .iter()
            .filter(|c| c.status == ConnectionStatus::Pending && c.addressee_id == user_id)
            .cloned()
            .collect()
    }

    /// Total spent across transactions dated in the given month.
    pub fn total_spent_in_month(&self, year: i32, month: u32) -> f64 {
        self.transactions
            .iter()
            .filter(|t| is_in_month(&t.date, year, month))
            .map(|t| t.amount)
            .sum()
    }
}

/// Signal-backed state container handed to components through context.
#[derive(Clone, Copy)]
pub struct ExpenseStore {
    state: Signal<StoreState>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            state: Signal::new(StoreState::default()),
        }
    }

    // Snapshot reads; subscribing is implicit when called during render.

    pub fn status(&self) -> LoadStatus {
        self.state.read().status
    }

    pub fn cards(&self) -> Vec<Card> {
        self.state.read().cards.clone()
    }

    pub fn budgets(&self) -> Vec<Budget> {
        self.state.read().budgets.clone()
    }

    pub fn transactions_with_details(&self) -> Vec<TransactionWithDetails> {
        self.state.read().transactions_with_details()
    }

    pub fn accepted_connections(&self) -> Vec<Connection> {
        self.state.read().accepted_connections()
    }

    pub fn pending_requests_received(&self, user_id: &str) -> Vec<Connection> {
        self.state.read().pending_requests_received(user_id)
    }

    pub fn total_spent_in_month(&self, year: i32, month: u32) -> f64 {
        self.state.read().total_spent_in_month(year, month)
    }

    /// Fetches the four collections as one concurrent batch. A failure
    /// on any of them leaves the current data in place and marks the
    /// store errored; nothing is applied partially.
    ///
    /// TODO: cancel an in-flight load when the session identity
    /// changes; today a load racing a sign-out can repopulate a
    /// cleared store.
    pub async fn load(mut self) {
        self.state.with_mut(|s| s.status = LoadStatus::Loading);
        let fetched = try_join!(
            api::get_cards(),
            api::get_transactions(),
            api::get_budgets(),
            api::get_connections(),
        );
        match fetched {
            Ok((cards, transactions, budgets, connections)) => {
                debug!(
                    "loaded {} cards, {} transactions, {} budgets, {} connections",
                    cards.len(),
                    transactions.len(),
                    budgets.len(),
                    connections.len()
                );
                self.state
                    .with_mut(|s| s.apply_loaded(cards, transactions, budgets, connections));
            }
            Err(e) => {
                error!("initial data load failed: {}", e);
                self.state.with_mut(|s| s.mark_errored());
            }
        }
    }

    /// Resets all collections; invoked on sign-out.
    pub fn clear(mut self) {
        self.state.with_mut(|s| s.clear());
    }

    /// Inserts a transaction, then refetches transactions and budgets:
    /// a backend trigger may have adjusted a budget's spent amount, and
    /// the client does no budget arithmetic of its own.
    pub async fn add_transaction(mut self, payload: CreateTransactionPayload) -> Result<(), String> {
        api::create_transaction(payload).await?;
        let transactions = api::get_transactions().await?;
        let budgets = api::get_budgets().await?;
        self.state.with_mut(|s| {
            s.transactions = transactions;
            s.budgets = budgets;
        });
        Ok(())
    }

    pub async fn add_card(mut self, payload: CreateCardPayload) -> Result<(), String> {
        api::create_card(payload).await?;
        let cards = api::get_cards().await?;
        self.state.with_mut(|s| s.cards = cards);
        Ok(())
    }

    pub async fn add_budget(mut self, payload: CreateBudgetPayload) -> Result<(), String> {
        api::create_budget(payload).await?;
        let budgets = api::get_budgets().await?;
        self.state.with_mut(|s| s.budgets = budgets);
        Ok(())
    }

    /// Returns the backend's status message on success; the refetch
    /// makes the caller's new outgoing request visible.
    pub async fn send_connection_invite(mut self, email: String) -> Result<String, String> {
        let message = api::send_connection_invite(&email).await?;
        let connections = api::get_connections().await?;
        self.state.with_mut(|s| s.connections = connections);
        Ok(message)
    }

    pub async fn respond_to_connection_request(
        mut self,
        id: String,
        decision: ConnectionStatus,
    ) -> Result<(), String> {
        api::respond_connection(&id, decision).await?;
        let connections = api::get_connections().await?;
        self.state.with_mut(|s| s.connections = connections);
        Ok(())
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}
