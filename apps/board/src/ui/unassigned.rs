use dioxus::prelude::*;

use crate::models::Lead;
use crate::ui::tile::{LeadTile, TileMeta};

/// Extra column for records whose group key is outside the canonical set
/// (unknown status, or no assigned agent). They surface here instead of
/// silently vanishing from the board.
#[component]
pub fn UnassignedColumn(title: String, leads: Vec<Lead>, meta: TileMeta) -> Element {
    let count = leads.len();

    rsx! {
        div { class: "board-column board-column-unassigned",
            div { class: "board-col-header border-dashed",
                div { class: "board-col-title-row",
                    h3 { class: "text-sm font-semibold text-slate-500", "{title}" }
                    span { class: "board-count", "{count}" }
                }
                p { class: "text-[11px] text-slate-400", "Needs triage" }
            }
            div { class: "board-col-list-scroll space-y-2",
                for lead in leads {
                    LeadTile { key: "{lead.id}", lead, meta }
                }
            }
        }
    }
}
