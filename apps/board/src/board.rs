use std::cmp::Ordering;

use crate::models::{Lead, LeadStatus, Priority};

/// Tri-state sort on time-to-close. `Default` keeps the group's original
/// order; the toggle cycles Default -> Fastest -> Slowest -> Fastest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Default,
    Fastest,
    Slowest,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Default => "Sort",
            SortOrder::Fastest => "Fast",
            SortOrder::Slowest => "Slow",
        }
    }
}

/// One column's local filter/sort selections. Each column owns its own copy;
/// `None` means the "All" option for that dimension.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnControls {
    pub status: Option<LeadStatus>,
    pub agent: Option<String>,
    pub priority: Option<Priority>,
    pub sort: SortOrder,
}

impl ColumnControls {
    pub fn is_active(&self) -> bool {
        self.status.is_some()
            || self.agent.is_some()
            || self.priority.is_some()
            || self.sort != SortOrder::Default
    }

    pub fn toggle_sort(&mut self) {
        self.sort = match self.sort {
            SortOrder::Fastest => SortOrder::Slowest,
            _ => SortOrder::Fastest,
        };
    }

    fn matches(&self, lead: &Lead) -> bool {
        if let Some(status) = self.status {
            if lead.lead_status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if lead.priority != priority {
                return false;
            }
        }
        if let Some(agent) = self.agent.as_deref() {
            if lead.agent_name() != Some(agent) {
                return false;
            }
        }
        true
    }

    /// Filters conjunctively, then sorts. The sort is stable, so ties keep
    /// the group's original relative order.
    pub fn apply(&self, leads: &[Lead]) -> Vec<Lead> {
        let mut rows: Vec<Lead> = leads
            .iter()
            .filter(|lead| self.matches(lead))
            .cloned()
            .collect();

        match self.sort {
            SortOrder::Default => {}
            SortOrder::Fastest => rows.sort_by(|a, b| compare_close_asc(a, b)),
            SortOrder::Slowest => rows.sort_by(|a, b| compare_close_desc(a, b)),
        }

        rows
    }
}

// Leads without an estimate sort after every dated lead in both directions,
// so only the dated-vs-dated arm flips between the two comparators.
fn compare_close_asc(a: &Lead, b: &Lead) -> Ordering {
    match (a.time_to_close, b.time_to_close) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_close_desc(a: &Lead, b: &Lead) -> Ordering {
    match (a.time_to_close, b.time_to_close) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive substring search on lead name, applied before grouping
/// so it narrows every column uniformly. Blank queries return everything.
pub fn search_leads(leads: &[Lead], query: &str) -> Vec<Lead> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return leads.to_vec();
    }
    leads
        .iter()
        .filter(|lead| lead.lead_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Result of partitioning the board. Every canonical key appears, empty or
/// not; leads whose key is outside the canonical set go to `unassigned`
/// instead of vanishing, and the views render them as an extra column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedLeads<K> {
    pub groups: Vec<(K, Vec<Lead>)>,
    pub unassigned: Vec<Lead>,
}

fn group_leads<K>(
    leads: &[Lead],
    keys: &[K],
    key_of: impl Fn(&Lead) -> Option<K>,
) -> GroupedLeads<K>
where
    K: Clone + PartialEq,
{
    let mut grouped = GroupedLeads {
        groups: keys
            .iter()
            .cloned()
            .map(|key| (key, Vec::new()))
            .collect(),
        unassigned: Vec::new(),
    };

    for lead in leads {
        let slot = key_of(lead)
            .and_then(|key| grouped.groups.iter_mut().find(|(group, _)| *group == key));
        match slot {
            Some((_, rows)) => rows.push(lead.clone()),
            None => grouped.unassigned.push(lead.clone()),
        }
    }

    grouped
}

pub fn group_by_status(leads: &[Lead]) -> GroupedLeads<LeadStatus> {
    group_leads(leads, &LeadStatus::ALL, |lead| Some(lead.lead_status))
}

pub fn group_by_agent(leads: &[Lead], agents: &[String]) -> GroupedLeads<String> {
    group_leads(leads, agents, |lead| {
        lead.agent_name().map(|name| name.to_string())
    })
}

/// Distinct agent names in first-seen dataset order; this is the derived
/// canonical key set for the agent board.
pub fn distinct_agents(leads: &[Lead]) -> Vec<String> {
    let mut agents: Vec<String> = Vec::new();
    for lead in leads {
        if let Some(name) = lead.agent_name() {
            if !agents.iter().any(|known| known == name) {
                agents.push(name.to_string());
            }
        }
    }
    agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::leads::{lead, sample_leads};

    fn ids(rows: &[Lead]) -> Vec<&str> {
        rows.iter().map(|lead| lead.id.as_str()).collect()
    }

    #[test]
    fn grouping_loses_and_duplicates_nothing() {
        let leads = sample_leads();
        let grouped = group_by_status(&leads);

        let mut regrouped: Vec<Lead> = grouped
            .groups
            .iter()
            .flat_map(|(_, rows)| rows.clone())
            .collect();
        regrouped.extend(grouped.unassigned.clone());

        assert_eq!(regrouped.len(), leads.len());
        for lead in &leads {
            assert_eq!(
                regrouped.iter().filter(|row| row.id == lead.id).count(),
                1,
                "lead {} must appear exactly once",
                lead.id
            );
        }
    }

    #[test]
    fn every_canonical_status_gets_a_column() {
        let grouped = group_by_status(&[lead("ld-1", "Solo", LeadStatus::Qualified, Priority::Low, Some("Aisha Verma"), Some(3))]);
        assert_eq!(grouped.groups.len(), LeadStatus::ALL.len());
        let empties = grouped
            .groups
            .iter()
            .filter(|(_, rows)| rows.is_empty())
            .count();
        assert_eq!(empties, 4);
    }

    #[test]
    fn unknown_status_lands_in_the_unassigned_bucket() {
        let mut stray = lead("ld-9", "Stray", LeadStatus::New, Priority::Low, None, None);
        stray.lead_status = LeadStatus::Unknown;
        let grouped = group_by_status(&[stray]);
        assert!(grouped.groups.iter().all(|(_, rows)| rows.is_empty()));
        assert_eq!(grouped.unassigned.len(), 1);
    }

    #[test]
    fn agentless_lead_is_unassigned_not_dropped() {
        let leads = vec![
            lead("ld-1", "With", LeadStatus::New, Priority::High, Some("Aisha Verma"), Some(5)),
            lead("ld-2", "Without", LeadStatus::New, Priority::Low, None, Some(9)),
        ];
        let agents = distinct_agents(&leads);
        let grouped = group_by_agent(&leads, &agents);
        assert_eq!(grouped.groups.len(), 1);
        assert_eq!(ids(&grouped.groups[0].1), vec!["ld-1"]);
        assert_eq!(ids(&grouped.unassigned), vec!["ld-2"]);
    }

    #[test]
    fn distinct_agents_keeps_first_seen_order() {
        let leads = sample_leads();
        let agents = distinct_agents(&leads);
        let mut seen = agents.clone();
        seen.dedup();
        assert_eq!(agents, seen);
        assert_eq!(agents.first().map(String::as_str), leads[0].agent_name());
    }

    #[test]
    fn empty_query_is_the_identity() {
        let leads = sample_leads();
        assert_eq!(search_leads(&leads, ""), leads);
        assert_eq!(search_leads(&leads, "   "), leads);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name() {
        let leads = vec![
            lead("ld-1", "Acme Robotics", LeadStatus::New, Priority::High, None, Some(5)),
            lead("ld-2", "Borealis Labs", LeadStatus::New, Priority::Low, None, Some(2)),
        ];
        assert_eq!(ids(&search_leads(&leads, "ROBOT")), vec!["ld-1"]);
        assert_eq!(ids(&search_leads(&leads, "lis la")), vec!["ld-2"]);
    }

    #[test]
    fn hopeless_query_empties_every_group() {
        let leads = sample_leads();
        let hits = search_leads(&leads, "zzzzz-no-such-lead");
        assert!(hits.is_empty());
        let grouped = group_by_status(&hits);
        assert!(grouped.groups.iter().all(|(_, rows)| rows.is_empty()));
        assert!(grouped.unassigned.is_empty());
    }

    #[test]
    fn all_on_every_filter_is_the_identity() {
        let leads = sample_leads();
        let controls = ColumnControls::default();
        assert_eq!(controls.apply(&leads), leads);
    }

    #[test]
    fn filters_are_conjunctive() {
        let leads = vec![
            lead("ld-1", "A", LeadStatus::New, Priority::High, Some("Aisha Verma"), Some(5)),
            lead("ld-2", "B", LeadStatus::New, Priority::Low, Some("Aisha Verma"), Some(2)),
            lead("ld-3", "C", LeadStatus::Closed, Priority::High, Some("Aisha Verma"), Some(8)),
        ];
        let controls = ColumnControls {
            status: Some(LeadStatus::New),
            priority: Some(Priority::High),
            ..ColumnControls::default()
        };
        assert_eq!(ids(&controls.apply(&leads)), vec!["ld-1"]);
    }

    #[test]
    fn status_filter_then_fastest_sort_orders_by_days() {
        // Dataset of 3 New leads with days {5, 2, 8}: the filter alone keeps
        // the original order, the ascending sort yields 2, 5, 8.
        let leads = vec![
            lead("ld-1", "A", LeadStatus::New, Priority::High, None, Some(5)),
            lead("ld-2", "B", LeadStatus::New, Priority::High, None, Some(2)),
            lead("ld-3", "C", LeadStatus::New, Priority::High, None, Some(8)),
        ];

        let filtered = ColumnControls {
            status: Some(LeadStatus::New),
            ..ColumnControls::default()
        };
        assert_eq!(ids(&filtered.apply(&leads)), vec!["ld-1", "ld-2", "ld-3"]);

        let sorted = ColumnControls {
            status: Some(LeadStatus::New),
            sort: SortOrder::Fastest,
            ..ColumnControls::default()
        };
        assert_eq!(ids(&sorted.apply(&leads)), vec!["ld-2", "ld-1", "ld-3"]);
    }

    #[test]
    fn descending_reverses_ascending_on_distinct_days() {
        let leads = vec![
            lead("ld-1", "A", LeadStatus::New, Priority::High, None, Some(5)),
            lead("ld-2", "B", LeadStatus::New, Priority::High, None, Some(2)),
            lead("ld-3", "C", LeadStatus::New, Priority::High, None, Some(8)),
        ];
        let fastest = ColumnControls {
            sort: SortOrder::Fastest,
            ..ColumnControls::default()
        };
        let slowest = ColumnControls {
            sort: SortOrder::Slowest,
            ..ColumnControls::default()
        };
        let mut reversed = fastest.apply(&leads);
        reversed.reverse();
        assert_eq!(slowest.apply(&leads), reversed);
    }

    #[test]
    fn ties_keep_original_order() {
        let leads = vec![
            lead("ld-1", "A", LeadStatus::New, Priority::High, None, Some(4)),
            lead("ld-2", "B", LeadStatus::New, Priority::High, None, Some(4)),
            lead("ld-3", "C", LeadStatus::New, Priority::High, None, Some(1)),
            lead("ld-4", "D", LeadStatus::New, Priority::High, None, Some(4)),
        ];
        let fastest = ColumnControls {
            sort: SortOrder::Fastest,
            ..ColumnControls::default()
        };
        assert_eq!(ids(&fastest.apply(&leads)), vec!["ld-3", "ld-1", "ld-2", "ld-4"]);

        let slowest = ColumnControls {
            sort: SortOrder::Slowest,
            ..ColumnControls::default()
        };
        assert_eq!(ids(&slowest.apply(&leads)), vec!["ld-1", "ld-2", "ld-4", "ld-3"]);
    }

    #[test]
    fn undated_leads_sort_last_either_way() {
        let leads = vec![
            lead("ld-1", "A", LeadStatus::New, Priority::High, None, None),
            lead("ld-2", "B", LeadStatus::New, Priority::High, None, Some(7)),
            lead("ld-3", "C", LeadStatus::New, Priority::High, None, Some(3)),
        ];
        let fastest = ColumnControls {
            sort: SortOrder::Fastest,
            ..ColumnControls::default()
        };
        let slowest = ColumnControls {
            sort: SortOrder::Slowest,
            ..ColumnControls::default()
        };
        assert_eq!(ids(&fastest.apply(&leads)), vec!["ld-3", "ld-2", "ld-1"]);
        assert_eq!(ids(&slowest.apply(&leads)), vec!["ld-2", "ld-3", "ld-1"]);
    }

    #[test]
    fn sort_toggle_cycles_and_never_returns_to_default() {
        let mut controls = ColumnControls::default();
        controls.toggle_sort();
        assert_eq!(controls.sort, SortOrder::Fastest);
        controls.toggle_sort();
        assert_eq!(controls.sort, SortOrder::Slowest);
        controls.toggle_sort();
        assert_eq!(controls.sort, SortOrder::Fastest);
        assert!(controls.is_active());
    }
}
