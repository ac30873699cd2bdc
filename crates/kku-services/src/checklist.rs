//! Seeded task lists and their progress arithmetic.
//!
//! All operations are pure: they return new lists and never mutate inputs.

use kku_core::error::GatewayError;
use kku_i18n::Translator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task category across both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Preparation,
    Arrival,
    Academic,
    Life,
    Visa,
    Documents,
    Settlement,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparation => "preparation",
            Self::Arrival => "arrival",
            Self::Academic => "academic",
            Self::Life => "life",
            Self::Visa => "visa",
            Self::Documents => "documents",
            Self::Settlement => "settlement",
        }
    }
}

impl FromStr for Category {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preparation" => Ok(Self::Preparation),
            "arrival" => Ok(Self::Arrival),
            "academic" => Ok(Self::Academic),
            "life" => Ok(Self::Life),
            "visa" => Ok(Self::Visa),
            "documents" => Ok(Self::Documents),
            "settlement" => Ok(Self::Settlement),
            other => Err(GatewayError::InvalidInput(format!("unknown category: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub completed: bool,
    #[serde(default)]
    pub important: bool,
}

/// Which seeded list a client is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Dashboard checklist; reset reseeds.
    Checklist,
    /// Arrival progress tracker; reset clears completion only.
    Progress,
}

struct Seed {
    id: &'static str,
    title_key: &'static str,
    category: Category,
    important: bool,
}

const fn seed(
    id: &'static str,
    title_key: &'static str,
    category: Category,
    important: bool,
) -> Seed {
    Seed {
        id,
        title_key,
        category,
        important,
    }
}

const CHECKLIST_SEED: &[Seed] = &[
    seed("visa-application", "checklist.items.visa-application", Category::Preparation, true),
    seed("flight-booking", "checklist.items.flight-booking", Category::Preparation, true),
    seed("accommodation", "checklist.items.accommodation", Category::Preparation, true),
    seed("health-insurance", "checklist.items.health-insurance", Category::Preparation, true),
    seed("vaccinations", "checklist.items.vaccinations", Category::Preparation, false),
    seed("passport-validity", "checklist.items.passport-validity", Category::Preparation, true),
    seed("dorm-checkin", "checklist.items.dorm-checkin", Category::Arrival, true),
    seed("foreign-registration", "checklist.items.foreign-registration", Category::Arrival, true),
    seed("bank-account", "checklist.items.bank-account", Category::Arrival, true),
    seed("student-id", "checklist.items.student-id", Category::Arrival, true),
    seed("sim-card", "checklist.items.sim-card", Category::Arrival, false),
    seed("course-registration", "checklist.items.course-registration", Category::Academic, true),
    seed("library-tour", "checklist.items.library-tour", Category::Academic, false),
    seed("academic-advisor", "checklist.items.academic-advisor", Category::Academic, false),
    seed("orientation", "checklist.items.orientation", Category::Life, true),
    seed("campus-tour", "checklist.items.campus-tour", Category::Life, false),
    seed("buddy-system", "checklist.items.buddy-system", Category::Life, false),
];

const PROGRESS_SEED: &[Seed] = &[
    seed("visa-1", "progress.tasks.visaApplication", Category::Visa, false),
    seed("visa-2", "progress.tasks.admissionLetter", Category::Visa, false),
    seed("visa-3", "progress.tasks.financialProof", Category::Visa, false),
    seed("doc-1", "progress.tasks.passport", Category::Documents, false),
    seed("doc-2", "progress.tasks.transcripts", Category::Documents, false),
    seed("doc-3", "progress.tasks.healthInsurance", Category::Documents, false),
    seed("arrival-1", "progress.tasks.flightBooking", Category::Arrival, false),
    seed("arrival-2", "progress.tasks.pickupService", Category::Arrival, false),
    seed("arrival-3", "progress.tasks.dormReservation", Category::Arrival, false),
    seed("settle-1", "progress.tasks.alienRegistration", Category::Settlement, false),
    seed("settle-2", "progress.tasks.bankAccount", Category::Settlement, false),
    seed("settle-3", "progress.tasks.phoneNumber", Category::Settlement, false),
];

impl ListKind {
    /// Local-storage key holding this list's snapshot.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Checklist => "kku-checklist",
            Self::Progress => "kku-progress-tasks",
        }
    }

    /// Categories in display order.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Checklist => &[
                Category::Preparation,
                Category::Arrival,
                Category::Academic,
                Category::Life,
            ],
            Self::Progress => &[
                Category::Visa,
                Category::Documents,
                Category::Arrival,
                Category::Settlement,
            ],
        }
    }

    /// Translation key for a category heading in this list.
    pub fn category_label_key(&self, category: Category) -> String {
        match self {
            Self::Checklist => format!("checklist.categories.{}", category.as_str()),
            Self::Progress => format!("progress.categories.{}", category.as_str()),
        }
    }

    /// Fresh, all-incomplete list with titles in the translator's locale.
    pub fn seed(&self, t: &Translator) -> Vec<ChecklistItem> {
        let seeds = match self {
            Self::Checklist => CHECKLIST_SEED,
            Self::Progress => PROGRESS_SEED,
        };
        seeds
            .iter()
            .map(|s| ChecklistItem {
                id: s.id.to_string(),
                title: t.text(s.title_key).to_string(),
                category: s.category,
                completed: false,
                important: s.important,
            })
            .collect()
    }
}

impl FromStr for ListKind {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checklist" => Ok(Self::Checklist),
            "progress" => Ok(Self::Progress),
            other => Err(GatewayError::NotFound(format!("no such list: {other}"))),
        }
    }
}

/// Completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Rounded percent in `0..=100`; `0` for an empty selection.
    pub percentage: u8,
}

/// Flip `completed` on the item with `id`. An unknown id yields an unchanged copy.
pub fn toggle(items: &[ChecklistItem], id: &str) -> Vec<ChecklistItem> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                ChecklistItem {
                    completed: !item.completed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// The seed list for `kind`, discarding any progress.
pub fn reset(kind: ListKind, t: &Translator) -> Vec<ChecklistItem> {
    kind.seed(t)
}

/// Every item marked incomplete.
pub fn clear_all(items: &[ChecklistItem]) -> Vec<ChecklistItem> {
    items
        .iter()
        .map(|item| ChecklistItem {
            completed: false,
            ..item.clone()
        })
        .collect()
}

pub fn filter(items: &[ChecklistItem], category: Option<Category>) -> Vec<&ChecklistItem> {
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect()
}

/// Completion over `items`, optionally restricted to one category.
pub fn progress(items: &[ChecklistItem], category: Option<Category>) -> Progress {
    let selected = filter(items, category);
    let total = selected.len();
    let completed = selected.iter().filter(|item| item.completed).count();
    let percentage = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u8
    };
    Progress {
        completed,
        total,
        percentage,
    }
}
