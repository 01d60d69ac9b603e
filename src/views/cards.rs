use dioxus::prelude::*;

use crate::constants::{MAX_DAY_OF_MONTH, MIN_DAY_OF_MONTH};
use crate::models::CreateCardPayload;
use crate::store::ExpenseStore;

fn parse_day(value: &str) -> Option<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|d| (MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).contains(d))
}

#[component]
pub fn CardsView() -> Element {
    let store = use_context::<ExpenseStore>();
    let cards = store.cards();

    let mut show_add_form = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut bank = use_signal(String::new);
    let mut closing_day = use_signal(String::new);
    let mut due_day = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut reset_form = move || {
        name.set(String::new());
        bank.set(String::new());
        closing_day.set(String::new());
        due_day.set(String::new());
        error.set(None);
    };

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        if submitting() {
            return;
        }

        let name_val = name().trim().to_string();
        let bank_val = bank().trim().to_string();
        if name_val.is_empty() || bank_val.is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        let (Some(closing), Some(due)) = (parse_day(&closing_day()), parse_day(&due_day())) else {
            error.set(Some(format!(
                "Days must be between {} and {}",
                MIN_DAY_OF_MONTH, MAX_DAY_OF_MONTH
            )));
            return;
        };

        let payload = CreateCardPayload {
            name: name_val,
            bank: bank_val,
            closing_day: closing,
            due_day: due,
        };

        submitting.set(true);
        error.set(None);

        spawn(async move {
            let result = store.add_card(payload).await;
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
            h1 { "CARDS" }
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
                        label { "BANK" }
                        input {
                            r#type: "text",
                            value: "{bank}",
                            oninput: move |e| bank.set(e.value()),
                            disabled: submitting(),
                        }
                    }

                    div { class: "form-group",
                        label { "STATEMENT CLOSING DAY" }
                        input {
                            r#type: "number",
                            min: "{MIN_DAY_OF_MONTH}",
                            max: "{MAX_DAY_OF_MONTH}",
                            value: "{closing_day}",
                            oninput: move |e| closing_day.set(e.value()),
                            disabled: submitting(),
                        }
                    }

                    div { class: "form-group",
                        label { "PAYMENT DUE DAY" }
                        input {
                            r#type: "number",
                            min: "{MIN_DAY_OF_MONTH}",
                            max: "{MAX_DAY_OF_MONTH}",
                            value: "{due_day}",
                            oninput: move |e| due_day.set(e.value()),
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

        if cards.is_empty() {
            div { class: "empty-state", "NO CARDS REGISTERED" }
        } else {
            div { class: "entity-list",
                for card in cards {
                    div { class: "entity-row", key: "{card.id}",
                        span { class: "name", "{card.name}" }
                        span { class: "category", "{card.bank}" }
                        span { class: "detail",
                            "CLOSES DAY {card.closing_day} · DUE DAY {card.due_day}"
                        }
                    }
                }
            }
        }
    }
}
