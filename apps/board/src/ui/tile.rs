use dioxus::prelude::*;

use crate::models::{Lead, Priority};
use crate::state::use_app_actions;
use crate::APP_CONFIG;

/// Which detail the tile's meta row shows: the status board already groups
/// by status, so its tiles show the agent, and vice versa.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TileMeta {
    AgentName,
    StatusBadge,
}

#[component]
pub fn LeadTile(lead: Lead, meta: TileMeta) -> Element {
    let actions = use_app_actions();

    let stalled = APP_CONFIG
        .get()
        .map(|config| config.is_stalled(lead.time_to_close))
        .unwrap_or(false);

    let stripe_class = format!("lead-tile-stripe priority-{}", lead.priority.css_slug());
    let close_class = if stalled {
        "lead-meta-item text-amber-600"
    } else {
        "lead-meta-item"
    };
    let close_label = lead.close_label();
    let is_urgent = lead.priority == Priority::High;
    let lead_id = lead.id.clone();

    let meta_node = match meta {
        TileMeta::AgentName => {
            let agent = lead
                .agent
                .as_ref()
                .map(|agent| agent.first_name())
                .unwrap_or("Unassigned")
                .to_string();
            rsx! {
                span { class: "lead-meta-item", "{agent}" }
            }
        }
        TileMeta::StatusBadge => {
            let badge_class = format!(
                "lead-status-badge status-{}-bg",
                lead.lead_status.css_slug()
            );
            let label = lead.lead_status.label();
            rsx! {
                span { class: "{badge_class}", "{label}" }
            }
        }
    };

    rsx! {
        button {
            class: "lead-tile flex w-full items-stretch rounded-lg border border-slate-200 bg-white text-left shadow-sm hover:border-slate-400",
            onclick: move |_| actions.select_lead(lead_id.clone()),
            div { class: "{stripe_class}" }
            div { class: "lead-tile-content flex-1 space-y-1 p-2",
                div { class: "flex items-center justify-between",
                    span { class: "text-xs font-semibold text-slate-800", "{lead.lead_name}" }
                    if is_urgent {
                        span { class: "urgent-dot" }
                    }
                }
                div { class: "flex items-center gap-3 text-[11px] text-slate-500",
                    {meta_node}
                    span { class: "{close_class}", "{close_label}" }
                }
            }
        }
    }
}
