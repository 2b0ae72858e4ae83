use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::APP_CONFIG;

#[component]
pub fn BoardHeader(
    title: String,
    subtitle: String,
    query: Signal<String>,
    switch_label: String,
    switch_to: Route,
) -> Element {
    let brand = APP_CONFIG
        .get()
        .map(|config| config.brand.clone())
        .unwrap_or_default();

    rsx! {
        header { class: "flex flex-wrap items-center justify-between gap-4",
            div { class: "flex flex-col",
                span { class: "text-[11px] uppercase tracking-wide text-slate-400", "{brand}" }
                h2 { class: "text-lg font-semibold text-slate-900", "{title}" }
                p { class: "text-xs text-slate-500", "{subtitle}" }
            }
            div { class: "flex items-center gap-3",
                SearchBox { query }
                Link {
                    class: "rounded bg-slate-900 px-3 py-1.5 text-xs font-semibold text-white hover:bg-slate-800",
                    to: switch_to,
                    "{switch_label}"
                }
            }
        }
    }
}

/// Global search box; narrows the whole dataset before grouping, so every
/// column sees the same subset.
#[component]
pub fn SearchBox(query: Signal<String>) -> Element {
    let mut query = query;
    let current = query();

    rsx! {
        div { class: "flex items-center gap-1 rounded-full border border-slate-300 bg-white px-3 py-1.5",
            input {
                class: "w-48 bg-transparent text-xs text-slate-700 outline-none",
                r#type: "text",
                placeholder: "Search leads...",
                value: "{current}",
                oninput: move |evt| query.set(evt.value()),
            }
            if !current.is_empty() {
                button {
                    class: "text-xs text-slate-400 hover:text-slate-700",
                    onclick: move |_| query.set(String::new()),
                    "×"
                }
            }
        }
    }
}
