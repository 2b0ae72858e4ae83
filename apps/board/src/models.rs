use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a lead. The variant order is the canonical board order
/// and drives both the default column layout and grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
    Closed,
    /// Catch-all for unrecognized status strings in the dataset. Never part
    /// of the canonical column set; such leads land in the unsorted bucket.
    #[serde(other)]
    Unknown,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::ProposalSent,
        LeadStatus::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::ProposalSent => "Proposal Sent",
            LeadStatus::Closed => "Closed",
            LeadStatus::Unknown => "Unknown",
        }
    }

    /// Styling hook, e.g. `status-proposalsent`.
    pub fn css_slug(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::ProposalSent => "proposalsent",
            LeadStatus::Closed => "closed",
            LeadStatus::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == value)
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::Unknown
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn css_slug(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.label() == value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    pub agent_name: String,
}

impl Agent {
    pub fn first_name(&self) -> &str {
        first_name(&self.agent_name)
    }
}

/// Short display form used on tiles and column headers; also applies to the
/// plain agent-name strings the agent board uses as group keys.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

/// A prospective customer record. Read-only for the whole app lifetime:
/// the board never creates, updates, or deletes leads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub lead_name: String,
    #[serde(default)]
    pub lead_status: LeadStatus,
    pub priority: Priority,
    #[serde(default)]
    pub agent: Option<Agent>,
    #[serde(default)]
    pub time_to_close: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Lead {
    pub fn agent_name(&self) -> Option<&str> {
        self.agent.as_ref().map(|agent| agent.agent_name.as_str())
    }

    /// Tile label for the close estimate, `"12d"` or `"?"`.
    pub fn close_label(&self) -> String {
        match self.time_to_close {
            Some(days) => format!("{days}d"),
            None => "?".to_string(),
        }
    }
}
