use dioxus::prelude::*;

use crate::models::SessionUser;

#[derive(Clone, Copy, PartialEq)]
pub enum Section {
    Dashboard,
    AddTransaction,
    Cards,
    Budgets,
    Connections,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "DASHBOARD",
            Section::AddTransaction => "ADD EXPENSE",
            Section::Cards => "CARDS",
            Section::Budgets => "BUDGETS",
            Section::Connections => "CONNECTIONS",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::AddTransaction,
            Section::Cards,
            Section::Budgets,
            Section::Connections,
        ]
    }
}

#[component]
pub fn TopStrip(user: SessionUser, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div { class: "top-strip",
            div { class: "app-name", "EXPENSE ORGANIZER" }
            div { class: "user-area",
                span { "{user.email}" }
                button { class: "btn-text", onclick: move |_| on_logout.call(()), "LOGOUT" }
            }
        }
    }
}

#[component]
pub fn SectionSwitcher(current: Section, on_change: EventHandler<Section>) -> Element {
    rsx! {
        div { class: "section-switcher",
            for section in Section::all() {
                button {
                    class: if *section == current { "active" } else { "" },
                    onclick: move |_| on_change.call(*section),
                    "{section.label()}"
                }
            }
        }
    }
}

#[component]
pub fn Shell(
    user: SessionUser,
    current_section: Section,
    on_section_change: EventHandler<Section>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { id: "main",
            TopStrip { user: user, on_logout: on_logout }
            SectionSwitcher { current: current_section, on_change: on_section_change }
            div { class: "content container",
                {children}
            }
        }
    }
}
