use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of disaster a report describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Fire,
    Storm,
    Flood,
    Landslide,
    Avalanche,
    Earthquake,
    Tsunami,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Fire,
        Category::Storm,
        Category::Flood,
        Category::Landslide,
        Category::Avalanche,
        Category::Earthquake,
        Category::Tsunami,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Fire => "Fire",
            Category::Storm => "Storm",
            Category::Flood => "Flood",
            Category::Landslide => "Landslide",
            Category::Avalanche => "Avalanche",
            Category::Earthquake => "Earthquake",
            Category::Tsunami => "Tsunami",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    /// Image shown next to reports of this kind. Categories without artwork of
    /// their own borrow the closest one.
    pub fn image_ref(self) -> &'static str {
        match self {
            Category::Fire => "fire",
            Category::Storm => "storm",
            Category::Flood | Category::Tsunami => "flood",
            Category::Landslide | Category::Avalanche | Category::Earthquake => "landslide",
        }
    }
}

/// Urgency of a report. Ordering follows [`Severity::priority`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn priority(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// Lifecycle label of a report. Any status may follow any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Active,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmergencyReport {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub coordinates: Option<String>,
    /// Day the report was filed, formatted for display (`dd/mm/YYYY`).
    pub report_date: String,
    pub created_at: DateTime<Utc>,
    pub category: Category,
    pub severity: Severity,
    pub status: Status,
    pub reporter_role: String,
    pub contact: Option<String>,
    pub affected: u32,
    pub image_ref: String,
    pub tags: Vec<String>,
}

impl EmergencyReport {
    /// Case-insensitive substring match against title, description and location.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }
}

/// Fields supplied when filing a new report.
#[derive(Clone, Debug, Default)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub location: String,
    pub coordinates: Option<String>,
    pub category: Category,
    pub severity: Severity,
    pub reporter_role: String,
    pub contact: Option<String>,
    pub affected: u32,
    pub tags: Vec<String>,
}

/// Partial edit of a report. `None` leaves the field untouched.
#[derive(Clone, Debug, Default)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub coordinates: Option<String>,
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
    pub reporter_role: Option<String>,
    pub contact: Option<String>,
    pub affected: Option<u32>,
    pub tags: Option<Vec<String>>,
}
