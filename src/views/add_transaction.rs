use dioxus::prelude::*;

use crate::constants::EXPENSE_CATEGORIES;
use crate::models::CreateTransactionPayload;
use crate::store::ExpenseStore;
use crate::utils::{split_payment_method, today_date, PaymentSource};

/// Expense entry form. The payment-method selector unifies cards and
/// budgets in one list; its value is split back into a (source,
/// identifier) pair right before submission.
#[component]
pub fn AddTransactionView(on_added: EventHandler<()>) -> Element {
    let store = use_context::<ExpenseStore>();
    let cards = store.cards();
    let budgets = store.budgets();

    let mut title = use_signal(String::new);
    let mut place = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut date = use_signal(today_date);
    let mut category = use_signal(String::new);
    let mut payment_method = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        if submitting() {
            return;
        }

        let title_val = title().trim().to_string();
        let place_val = place().trim().to_string();
        if title_val.is_empty() || place_val.is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        let amount_val: f64 = match amount().parse() {
            Ok(v) if v > 0.0 => v,
            _ => {
                error.set(Some("Amount must be a positive number".to_string()));
                return;
            }
        };

        if category().is_empty() {
            error.set(Some("Category is required".to_string()));
            return;
        }

        let Some((source, source_id)) = split_payment_method(&payment_method()) else {
            error.set(Some("Please choose a payment method".to_string()));
            return;
        };

        let payload = CreateTransactionPayload {
            title: title_val,
            place: place_val,
            amount: amount_val,
            date: date(),
            category: category(),
            card_id: (source == PaymentSource::Card).then(|| source_id.clone()),
            budget_id: (source == PaymentSource::Budget).then(|| source_id.clone()),
            kind: source.kind(),
        };

        submitting.set(true);
        error.set(None);

        spawn(async move {
            let result = store.add_transaction(payload).await;
            submitting.set(false);
            match result {
                Ok(()) => on_added.call(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    rsx! {
        div { class: "content-header",
            h1 { "ADD EXPENSE" }
        }

        div { class: "form-block",
            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { "TITLE" }
                    input {
                        r#type: "text",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                        disabled: submitting(),
                    }
                }

                div { class: "form-group",
                    label { "PLACE" }
                    input {
                        r#type: "text",
                        value: "{place}",
                        oninput: move |e| place.set(e.value()),
                        disabled: submitting(),
                    }
                }

                div { class: "form-group",
                    label { "AMOUNT" }
                    input {
                        r#type: "number",
                        step: "0.01",
                        min: "0.01",
                        value: "{amount}",
                        oninput: move |e| amount.set(e.value()),
                        disabled: submitting(),
                    }
                }

                div { class: "form-group",
                    label { "DATE" }
                    input {
                        r#type: "date",
                        value: "{date}",
                        onchange: move |e| date.set(e.value()),
                        disabled: submitting(),
                    }
                }

                div { class: "form-group",
                    label { "CATEGORY" }
                    select {
                        value: "{category}",
                        onchange: move |e| category.set(e.value()),
                        disabled: submitting(),
                        option { value: "", "CHOOSE..." }
                        for name in EXPENSE_CATEGORIES {
                            option { value: "{name}", "{name}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "PAYMENT METHOD" }
                    select {
                        value: "{payment_method}",
                        onchange: move |e| payment_method.set(e.value()),
                        disabled: submitting(),
                        option { value: "", "CHOOSE..." }
                        optgroup { label: "CARDS",
                            for card in cards.iter() {
                                option { value: "card-{card.id}", "{card.name} ({card.bank})" }
                            }
                        }
                        optgroup { label: "BUDGETS",
                            for budget in budgets.iter() {
                                option { value: "budget-{budget.id}", "{budget.name}" }
                            }
                        }
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
}
