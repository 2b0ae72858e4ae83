use dioxus::prelude::*;

use crate::board::{self, ColumnControls};
use crate::dataset;
use crate::models::{first_name, Lead, LeadStatus, Priority};
use crate::ui::header::BoardHeader;
use crate::ui::suggestions::SuggestionsDrawer;
use crate::ui::tile::{LeadTile, TileMeta};
use crate::ui::unassigned::UnassignedColumn;
use crate::Route;

/// Workload view: one column per agent, in the order agents first appear in
/// the dataset. Leads without an agent get the extra Unassigned column.
#[component]
pub fn AgentBoard() -> Element {
    let search = use_signal(String::new);

    let leads = dataset::leads();
    let agents = board::distinct_agents(leads);
    let visible = board::search_leads(leads, &search());
    let grouped = board::group_by_agent(&visible, &agents);

    rsx! {
        div { class: "app-shell space-y-4",
            BoardHeader {
                title: "Agent Workload",
                subtitle: "Performance & assignment view",
                query: search,
                switch_label: "Pipeline",
                switch_to: Route::StatusBoard {},
            }
            div { class: "flex items-start gap-4 overflow-x-auto pb-4",
                for (agent, rows) in grouped.groups {
                    AgentColumn { key: "{agent}", agent_name: agent, leads: rows }
                }
                if !grouped.unassigned.is_empty() {
                    UnassignedColumn {
                        title: "Unassigned",
                        leads: grouped.unassigned,
                        meta: TileMeta::StatusBadge,
                    }
                }
            }
            SuggestionsDrawer {}
        }
    }
}

#[component]
fn AgentColumn(agent_name: String, leads: Vec<Lead>) -> Element {
    let mut controls = use_signal(ColumnControls::default);
    let mut show_filters = use_signal(|| false);

    let visible = controls.read().apply(&leads);
    let count = visible.len();
    let filters_open = show_filters();
    let toggle_class = if controls.read().is_active() || filters_open {
        "board-filter-toggle active"
    } else {
        "board-filter-toggle"
    };
    let display_name = first_name(&agent_name).to_string();
    let initial = display_name.chars().next().unwrap_or('?');
    let selected_status = controls.read().status;
    let selected_priority = controls.read().priority;
    let sort_label = controls.read().sort.label();

    rsx! {
        div { class: "board-column",
            div { class: "board-col-header",
                div { class: "board-col-title-row",
                    div { class: "board-title-group",
                        div { class: "agent-avatar", "{initial}" }
                        div { class: "agent-info",
                            h3 { class: "text-sm font-semibold text-slate-800", "{display_name}" }
                            span { class: "board-count", "{count} leads" }
                        }
                    }
                    button {
                        class: "{toggle_class}",
                        title: "Filter this agent's leads",
                        onclick: move |_| {
                            let open = show_filters();
                            show_filters.set(!open);
                        },
                        "Filter"
                    }
                }
                if filters_open {
                    div { class: "board-col-filters open",
                        select {
                            class: "board-select",
                            onchange: move |evt| {
                                controls.write().status = LeadStatus::parse(&evt.value());
                            },
                            option { value: "All", selected: selected_status.is_none(), "All Statuses" }
                            for status in LeadStatus::ALL {
                                option {
                                    value: "{status}",
                                    selected: selected_status == Some(status),
                                    "{status}"
                                }
                            }
                        }
                        div { class: "board-filter-row-2",
                            select {
                                class: "board-select",
                                onchange: move |evt| {
                                    controls.write().priority = Priority::parse(&evt.value());
                                },
                                option { value: "All", selected: selected_priority.is_none(), "Priority" }
                                for priority in Priority::ALL {
                                    option {
                                        value: "{priority}",
                                        selected: selected_priority == Some(priority),
                                        "{priority}"
                                    }
                                }
                            }
                            button {
                                class: "board-sort-btn",
                                title: "Sort by Time to Close",
                                onclick: move |_| controls.write().toggle_sort(),
                                "{sort_label}"
                            }
                        }
                    }
                }
            }
            div { class: "board-col-list-scroll space-y-2",
                if visible.is_empty() {
                    div { class: "board-empty", "No leads assigned" }
                } else {
                    for lead in visible {
                        LeadTile { key: "{lead.id}", lead, meta: TileMeta::StatusBadge }
                    }
                }
            }
        }
    }
}
