use dioxus::prelude::*;

use crate::models::ConnectionStatus;
use crate::session::Session;
use crate::store::ExpenseStore;
use crate::utils::{counterparty_email, format_date_short};

/// Account-linking screen: send invites by email, answer received
/// requests, list established connections. The invite outcome message
/// comes from the backend and is shown verbatim.
#[component]
pub fn ConnectionsView() -> Element {
    let session = use_context::<Session>();
    let store = use_context::<ExpenseStore>();

    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // The shell only renders this view signed in; the guard covers the
    // brief window of a sign-out racing a rerender.
    let Some(user) = session.current_user() else {
        return rsx! {};
    };

    let pending = store.pending_requests_received(&user.id);
    let accepted = store.accepted_connections();

    let handle_invite = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        if submitting() {
            return;
        }

        let email_val = email().trim().to_string();
        if email_val.is_empty() || !email_val.contains('@') {
            error.set(Some("Please enter a valid email address".to_string()));
            return;
        }

        submitting.set(true);
        error.set(None);
        success.set(None);

        spawn(async move {
            let result = store.send_connection_invite(email_val).await;
            submitting.set(false);
            match result {
                Ok(message) => {
                    success.set(Some(message));
                    email.set(String::new());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let mut respond = move |id: String, decision: ConnectionStatus| {
        error.set(None);
        spawn(async move {
            if let Err(e) = store.respond_to_connection_request(id, decision).await {
                error.set(Some(e));
            }
        });
    };

    let user_id = user.id.clone();
    let user_id_for_accepted = user.id.clone();

    rsx! {
        div { class: "content-header",
            h1 { "CONNECTIONS" }
        }

        div { class: "form-block",
            h2 { "INVITE SOMEONE" }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }
            if let Some(msg) = success() {
                div { class: "success-message", "{msg}" }
            }

            form { onsubmit: handle_invite,
                div { class: "form-group",
                    label { "EMAIL" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        disabled: submitting(),
                    }
                }

                button {
                    class: "primary w-full",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "SENDING..." } else { "SEND INVITE" }
                }
            }
        }

        div { class: "dashboard-block",
            h2 { "REQUESTS RECEIVED" }
            if pending.is_empty() {
                div { class: "empty-state", "NO PENDING REQUESTS" }
            } else {
                div { class: "entity-list",
                    for request in pending {
                        {
                            let from = counterparty_email(&request, &user_id);
                            let accept_id = request.id.clone();
                            let decline_id = request.id.clone();
                            rsx! {
                                div { class: "entity-row", key: "{request.id}",
                                    span { class: "name", "{from}" }
                                    span { class: "date", "{format_date_short(&request.created_at)}" }
                                    div { class: "flex gap-2",
                                        button {
                                            class: "primary",
                                            onclick: move |_| respond(accept_id.clone(), ConnectionStatus::Accepted),
                                            "ACCEPT"
                                        }
                                        button {
                                            onclick: move |_| respond(decline_id.clone(), ConnectionStatus::Declined),
                                            "DECLINE"
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
            h2 { "CONNECTED ACCOUNTS" }
            if accepted.is_empty() {
                div { class: "empty-state", "NO CONNECTIONS YET" }
            } else {
                div { class: "entity-list",
                    for connection in accepted {
                        {
                            let other = counterparty_email(&connection, &user_id_for_accepted);
                            rsx! {
                                div { class: "entity-row", key: "{connection.id}",
                                    span { class: "name", "{other}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
