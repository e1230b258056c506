//! Frontend Models
//!
//! Data structures matching the catalog configuration document.

use serde::{Deserialize, Serialize};

/// Catalog item (immutable, from configuration)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
}

/// Static profile shown in the export header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub mobile: String,
    /// Recipient of the messaging link
    pub shopkeeper_mobile: String,
}

/// Optional knobs of the configuration document.
///
/// Every field has a default so a document without `settings` still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub title: String,
    pub default_unit: Option<String>,
    pub default_quantity: String,
    /// Sentinel unit rendered without a unit label. `null` disables it.
    pub other_unit: Option<String>,
    pub messaging_url: String,
    pub total_label: String,
    pub toast_millis: u32,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Grocery List".to_string(),
            default_unit: None,
            default_quantity: "1".to_string(),
            other_unit: Some("Other".to_string()),
            messaging_url: "https://wa.me".to_string(),
            total_label: "Total Items".to_string(),
            toast_millis: 3000,
            log_level: "info".to_string(),
        }
    }
}

/// The whole configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
    pub units: Vec<String>,
    pub user: UserProfile,
    #[serde(default)]
    pub settings: Settings,
}

impl Catalog {
    /// Units offered in the selector: configured units, then the sentinel.
    pub fn unit_choices(&self) -> Vec<String> {
        let mut choices = self.units.clone();
        if let Some(other) = &self.settings.other_unit {
            if !choices.iter().any(|u| u == other) {
                choices.push(other.clone());
            }
        }
        choices
    }

    pub fn default_unit(&self) -> Option<String> {
        self.settings
            .default_unit
            .clone()
            .or_else(|| self.unit_choices().into_iter().next())
    }

    pub fn is_other_unit(&self, unit: &str) -> bool {
        self.settings.other_unit.as_deref() == Some(unit)
    }
}

/// Per-session state of one catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: u32,
    pub unit: String,
    pub quantity: String,
    pub selected: bool,
}

/// Notice severity, also used as CSS modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast success",
            NoticeKind::Info => "toast info",
            NoticeKind::Warning => "toast warning",
            NoticeKind::Error => "toast error",
        }
    }
}

/// Transient UI message
#[derive(Debug, Clone, PartialEq)]
pub struct ToastNotice {
    pub id: u32,
    pub text: String,
    pub kind: NoticeKind,
}
