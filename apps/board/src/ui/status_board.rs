use dioxus::prelude::*;

use crate::board::{self, ColumnControls};
use crate::dataset;
use crate::models::{first_name, Lead, LeadStatus, Priority};
use crate::ui::header::BoardHeader;
use crate::ui::suggestions::SuggestionsDrawer;
use crate::ui::tile::{LeadTile, TileMeta};
use crate::ui::unassigned::UnassignedColumn;
use crate::Route;

/// Pipeline view: one column per canonical status, in enumeration order.
#[component]
pub fn StatusBoard() -> Element {
    let search = use_signal(String::new);

    let leads = dataset::leads();
    let agents = board::distinct_agents(leads);
    let visible = board::search_leads(leads, &search());
    let grouped = board::group_by_status(&visible);

    rsx! {
        div { class: "app-shell space-y-4",
            BoardHeader {
                title: "Pipeline",
                subtitle: "Manage leads by status",
                query: search,
                switch_label: "Agent workload",
                switch_to: Route::AgentBoard {},
            }
            div { class: "flex items-start gap-4 overflow-x-auto pb-4",
                for (status, rows) in grouped.groups {
                    StatusColumn {
                        key: "{status}",
                        status,
                        leads: rows,
                        agents: agents.clone(),
                    }
                }
                if !grouped.unassigned.is_empty() {
                    UnassignedColumn {
                        title: "Unsorted",
                        leads: grouped.unassigned,
                        meta: TileMeta::AgentName,
                    }
                }
            }
            SuggestionsDrawer {}
        }
    }
}

#[component]
fn StatusColumn(status: LeadStatus, leads: Vec<Lead>, agents: Vec<String>) -> Element {
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
    let header_class = format!("board-col-header status-{}-border", status.css_slug());
    let icon_class = format!("status-icon-bg status-{}-bg", status.css_slug());
    let selected_agent = controls.read().agent.clone();
    let selected_priority = controls.read().priority;
    let sort_label = controls.read().sort.label();

    rsx! {
        div { class: "board-column",
            div { class: "{header_class}",
                div { class: "board-col-title-row",
                    div { class: "board-title-group",
                        span { class: "{icon_class}" }
                        h3 { class: "text-sm font-semibold text-slate-800", "{status}" }
                        span { class: "board-count", "{count}" }
                    }
                    button {
                        class: "{toggle_class}",
                        title: "Filter this column",
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
                                let value = evt.value();
                                controls.write().agent = (value != "All").then_some(value);
                            },
                            option { value: "All", selected: selected_agent.is_none(), "All Agents" }
                            for agent in agents.iter() {
                                option {
                                    value: "{agent}",
                                    selected: selected_agent.as_deref() == Some(agent.as_str()),
                                    {first_name(agent)}
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
                    div { class: "board-empty", "No leads" }
                } else {
                    for lead in visible {
                        LeadTile { key: "{lead.id}", lead, meta: TileMeta::AgentName }
                    }
                }
            }
        }
    }
}
