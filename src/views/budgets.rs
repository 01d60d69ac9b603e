use dioxus::prelude::*;

use crate::models::CreateBudgetPayload;
use crate::store::ExpenseStore;
use crate::utils::{budget_progress_percent, format_amount};

#[component]
pub fn BudgetsView() -> Element {
    let store = use_context::<ExpenseStore>();
    let budgets = store.budgets();

    let mut show_add_form = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut total_amount = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut reset_form = move || {
        name.set(String::new());
        total_amount.set(String::new());
        error.set(None);
    };

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        if submitting() {
            return;
        }

        let name_val = name().trim().to_string();
        if name_val.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }

        let total: f64 = match total_amount().parse() {
            Ok(v) if v > 0.0 => v,
            _ => {
                error.set(Some("Total amount must be a positive number".to_string()));
                return;
            }
        };

        let payload = CreateBudgetPayload {
            name: name_val,
            total_amount: total,
        };

        submitting.set(true);
        error.set(None);

        spawn(async move {
            let result = store.add_budget(payload).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    reset_form();
                    show_add_form.set(false);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    rsx! {
        div { class: "content-header",
            h1 { "BUDGETS" }
            button {
                onclick: move |_| {
                    if show_add_form() {
                        reset_form();
                    }
                    show_add_form.set(!show_add_form());
                },
                if show_add_form() { "CANCEL" } else { "ADD" }
            }
        }

        if show_add_form() {
            div { class: "form-block",
                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                form { onsubmit: handle_submit,
                    div { class: "form-group",
                        label { "NAME" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            disabled: submitting(),
                        }
                    }

                    div { class: "form-group",
                        label { "TOTAL AMOUNT" }
                        input {
                            r#type: "number",
                            step: "0.01",
                            min: "0.01",
                            value: "{total_amount}",
                            oninput: move |e| total_amount.set(e.value()),
                            disabled: submitting(),
                        }
                    }

                    button {
                        class: "primary w-full",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "SAVING..." } else { "SAVE" }
                    }
                }
            }
        }

        if budgets.is_empty() {
            div { class: "empty-state", "NO BUDGETS REGISTERED" }
        } else {
            div { class: "entity-list",
                for budget in budgets {
                    {
                        let pct = budget_progress_percent(&budget);
                        rsx! {
                            div { class: "entity-row", key: "{budget.id}",
                                span { class: "name", "{budget.name}" }
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
