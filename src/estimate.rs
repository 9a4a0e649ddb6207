use serde::{Deserialize, Serialize};

/// One priced line of a sales estimate.
///
/// Items are identified by their position in [`Estimate::items`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
}

impl WorkItem {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            amount,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Lowercased "name description" used for keyword matching.
    pub fn search_text(&self) -> String {
        let description = self.description.as_deref().unwrap_or("");
        format!("{} {}", self.name, description).to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub items: Vec<WorkItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

impl Estimate {
    pub fn new(items: Vec<WorkItem>) -> Self {
        Self {
            items,
            total_amount: None,
        }
    }

    /// The declared total, or the sum of item amounts when none was given.
    pub fn effective_total(&self) -> f64 {
        self.total_amount
            .unwrap_or_else(|| self.items.iter().map(|item| item.amount).sum())
    }
}
