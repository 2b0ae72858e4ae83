use dioxus::prelude::*;

use crate::dataset;
use crate::state::{use_app_actions, use_app_state};
use crate::suggestions;

/// Floating "Smart Actions" panel for the selected lead: templated
/// activity-log sentences the user can take as a draft note.
#[component]
pub fn SuggestionsDrawer() -> Element {
    let state = use_app_state();
    let actions = use_app_actions();

    let snapshot = state.read();
    let selected = snapshot.selected_lead_id.as_ref().and_then(|id| {
        dataset::leads().iter().find(|lead| &lead.id == id)
    });
    let Some(lead) = selected.cloned() else {
        return rsx! {};
    };
    let draft = snapshot.draft_note.clone();
    drop(snapshot);

    let chips = suggestions::suggestions_for(&lead);
    let status_label = lead.lead_status.label();

    rsx! {
        aside { class: "activity-suggestions fixed bottom-4 right-4 w-96 space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-lg",
            header { class: "flex items-center justify-between",
                div {
                    h3 { class: "text-sm font-semibold text-slate-900", "Smart Actions" }
                    p { class: "text-[11px] text-slate-500", "{lead.lead_name} · {status_label}" }
                }
                button {
                    class: "text-xs text-slate-400 hover:text-slate-700",
                    onclick: move |_| actions.clear_selection(),
                    "Close"
                }
            }
            div { class: "suggestion-list flex flex-col gap-2",
                for text in chips {
                    SuggestionChip { key: "{text}", text }
                }
            }
            if let Some(note) = draft {
                div { class: "space-y-1 rounded bg-slate-100 p-2 text-xs text-slate-700",
                    p { "{note}" }
                    button {
                        class: "text-[11px] text-slate-500 hover:text-slate-800",
                        onclick: move |_| actions.clear_note(),
                        "Clear note"
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionChip(text: String) -> Element {
    let actions = use_app_actions();
    let chosen = text.clone();

    rsx! {
        button {
            class: "suggestion-chip rounded-full border border-slate-300 px-3 py-1 text-left text-xs text-slate-700 hover:border-slate-500",
            onclick: move |_| actions.choose_suggestion(chosen.clone()),
            "{text}"
        }
    }
}
