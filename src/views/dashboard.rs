use dioxus::prelude::*;

use crate::models::TransactionWithDetails;
use crate::store::{ExpenseStore, LoadStatus};
use crate::utils::{budget_progress_percent, current_year_month, format_amount, format_date_short};

const RECENT_LIMIT: usize = 5;

#[component]
pub fn DashboardView() -> Element {
    let store = use_context::<ExpenseStore>();

    let status = store.status();
    if status == LoadStatus::Errored {
        return rsx! {
            div { class: "content-header",
                h1 { "DASHBOARD" }
            }
            div { class: "error-message",
                "COULD NOT LOAD YOUR DATA. SIGN OUT AND BACK IN TO TRY AGAIN."
            }
        };
    }
    if status != LoadStatus::Loaded {
        return rsx! {
            div { class: "content-header",
                h1 { "DASHBOARD" }
            }
            div { class: "loading", "LOADING..." }
        };
    }

    let (year, month) = current_year_month();
    let total_month = store.total_spent_in_month(year, month);
    let budgets = store.budgets();
    let detailed = store.transactions_with_details();
    let recent: Vec<TransactionWithDetails> =
        detailed.into_iter().take(RECENT_LIMIT).collect();

    rsx! {
        div { class: "content-header",
            h1 { "DASHBOARD" }
        }

        div { class: "dashboard-grid",
            div { class: "dashboard-block",
                h2 { "THIS MONTH" }

                div { class: "analytics-item",
                    div { class: "analytics-label", "TOTAL SPENT" }
                    div { class: "analytics-value", "{format_amount(total_month)}" }
                }

                if budgets.is_empty() {
                    div { class: "empty-state", "NO BUDGETS YET" }
                } else {
                    div { class: "analytics-item mt-2",
                        div { class: "analytics-label mb-1", "BUDGETS" }
                        div { class: "bar-chart",
                            for budget in budgets.iter() {
                                {
                                    let pct = budget_progress_percent(budget);
                                    rsx! {
                                        div { class: "bar-row", key: "{budget.id}",
                                            span { class: "bar-label", "{budget.name}" }
                                            div { class: "bar-track",
                                                div { class: "bar-fill", style: "width: {pct}%" }
                                            }
                                            span { class: "bar-value",
                                                "{format_amount(budget.spent_amount)} / {format_amount(budget.total_amount)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-block",
                h2 { "RECENT TRANSACTIONS" }
                if recent.is_empty() {
                    div { class: "empty-state", "NO TRANSACTIONS" }
                } else {
                    div { class: "transaction-list",
                        for item in recent {
                            {
                                let t = &item.transaction;
                                let source = item
                                    .card
                                    .as_ref()
                                    .map(|c| c.name.as_str())
                                    .or_else(|| item.budget.as_ref().map(|b| b.name.as_str()))
                                    .unwrap_or("—");
                                let author = t
                                    .author
                                    .as_ref()
                                    .and_then(|a| a.email.clone());
                                rsx! {
                                    div { class: "transaction-row", key: "{t.id}",
                                        span { class: "date", "{format_date_short(&t.date)}" }
                                        span { class: "name", "{t.title} · {t.place}" }
                                        span { class: "category", "{t.category}" }
                                        span { class: "category", "{source}" }
                                        if let Some(email) = author {
                                            span { class: "author-badge", "{email}" }
                                        }
                                        span { class: "amount expense", "{format_amount(t.amount)}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
