use dioxus::prelude::*;

use expense_organizer::components::{Section, Shell};
use expense_organizer::session::Session;
use expense_organizer::store::ExpenseStore;
use expense_organizer::views::{
    AddTransactionView, AuthScreen, BudgetsView, CardsView, ConnectionsView, DashboardView,
};

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[allow(non_snake_case)]
fn App() -> Element {
    let session = use_context_provider(Session::new);
    let store = use_context_provider(ExpenseStore::new);
    let mut current_section = use_signal(|| Section::Dashboard);

    // Resolve the persisted session once on startup.
    use_effect(move || {
        spawn(async move {
            session.restore().await;
        });
    });

    // Observer driving the store from the identity: load on sign-in,
    // clear on sign-out.
    use_effect(move || {
        if session.current_user().is_some() {
            spawn(async move {
                store.load().await;
            });
        } else if session.resolved() {
            store.clear();
        }
    });

    let handle_logout = move |_| {
        spawn(async move {
            session.sign_out().await;
            current_section.set(Section::Dashboard);
        });
    };

    // Still checking for a persisted session
    if !session.resolved() {
        return rsx! {
            div { class: "auth-container",
                div { class: "loading", "LOADING..." }
            }
        };
    }

    let Some(current_user) = session.current_user() else {
        return rsx! {
            AuthScreen {}
        };
    };

    rsx! {
        Shell {
            user: current_user,
            current_section: current_section(),
            on_section_change: move |section| current_section.set(section),
            on_logout: handle_logout,

            match current_section() {
                Section::Dashboard => rsx! {
                    DashboardView {}
                },
                Section::AddTransaction => rsx! {
                    AddTransactionView {
                        on_added: move |_| current_section.set(Section::Dashboard)
                    }
                },
                Section::Cards => rsx! {
                    CardsView {}
                },
                Section::Budgets => rsx! {
                    BudgetsView {}
                },
                Section::Connections => rsx! {
                    ConnectionsView {}
                },
            }
        }
    }
}
